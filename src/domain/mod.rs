//! Domain layer containing the catalog entities and their rules.
//!
//! # Architecture
//!
//! - [`entities`] - Books, authors and publishers
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Page window math for ordered listings
//! - [`validation`] - Field rules and full-message assembly
//!
//! The domain layer has no dependency on the HTTP layer. Repository traits are
//! implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod validation;
