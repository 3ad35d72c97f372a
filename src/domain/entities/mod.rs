//! Core domain entities representing the catalog.
//!
//! # Entity Types
//!
//! - [`Book`] - A catalogued book, owned by an author and a publisher
//! - [`Author`] - The writer a book belongs to
//! - [`Publisher`] - The house a book belongs to
//!
//! Validated inputs are separate types (`NewBook`, `NewAuthor`,
//! `NewPublisher`). Client input is staged in drafts (`BookDraft`,
//! `NameDraft`) which are validated before they become inputs.

pub mod author;
pub mod book;
pub mod publisher;

pub use author::{Author, NewAuthor};
pub use book::{Book, BookDraft, BookPatch, NewBook};
pub use publisher::{NewPublisher, Publisher};

use validator::Validate;

use crate::domain::validation::not_blank;

/// Client input for records that only carry a name (authors, publishers).
#[derive(Debug, Clone, Default, Validate)]
pub struct NameDraft {
    #[validate(
        required(message = "can't be blank"),
        custom(function = "not_blank", message = "can't be blank")
    )]
    pub name: Option<String>,
}

impl NameDraft {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}
