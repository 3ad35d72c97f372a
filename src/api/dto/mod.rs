//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod author;
pub mod book;
pub mod health;
pub mod message;
pub mod pagination;
pub mod publisher;
