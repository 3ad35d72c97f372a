//! Domain entity representing a catalogued book.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::validation::not_blank;

/// A book in the catalog.
///
/// Every persisted book references an existing [`super::Author`] and
/// [`super::Publisher`].
#[derive(Debug, Clone)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub year: Option<i32>,
    pub author_id: i64,
    pub publisher_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field set used for both inserts and full-field updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub year: Option<i32>,
    pub author_id: i64,
    pub publisher_id: i64,
}

/// Client-supplied changes to a book.
///
/// Each field follows the same three-state rule:
///
/// - `None` → leave the field untouched
/// - `Some(None)` → clear the field
/// - `Some(Some(v))` → set the field to `v`
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<Option<String>>,
    pub genre: Option<Option<String>>,
    pub language: Option<Option<String>>,
    pub edition: Option<Option<String>>,
    pub place: Option<Option<String>>,
    pub year: Option<Option<i32>>,
    pub author_id: Option<Option<i64>>,
    pub publisher_id: Option<Option<i64>>,
}

/// A book under construction, before its rules have been checked.
///
/// Reference checks (author, publisher) need the repositories and live in
/// [`crate::application::services::BookService`]; field rules are declared here.
#[derive(Debug, Clone, Default, Validate)]
pub struct BookDraft {
    #[validate(
        required(message = "can't be blank"),
        custom(function = "not_blank", message = "can't be blank")
    )]
    pub title: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub year: Option<i32>,
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
}

impl BookDraft {
    /// Starts from the stored values of `book`.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            genre: book.genre.clone(),
            language: book.language.clone(),
            edition: book.edition.clone(),
            place: book.place.clone(),
            year: book.year,
            author_id: Some(book.author_id),
            publisher_id: Some(book.publisher_id),
        }
    }

    /// Overlays every field present in `patch`.
    pub fn apply(mut self, patch: BookPatch) -> Self {
        overlay(&mut self.title, patch.title);
        overlay(&mut self.genre, patch.genre);
        overlay(&mut self.language, patch.language);
        overlay(&mut self.edition, patch.edition);
        overlay(&mut self.place, patch.place);
        overlay(&mut self.year, patch.year);
        overlay(&mut self.author_id, patch.author_id);
        overlay(&mut self.publisher_id, patch.publisher_id);
        self
    }

    /// Converts into a [`NewBook`] once every required field is present.
    pub fn into_new_book(self) -> Option<NewBook> {
        Some(NewBook {
            title: self.title?,
            genre: self.genre,
            language: self.language,
            edition: self.edition,
            place: self.place,
            year: self.year,
            author_id: self.author_id?,
            publisher_id: self.publisher_id?,
        })
    }
}

impl From<BookPatch> for BookDraft {
    fn from(patch: BookPatch) -> Self {
        BookDraft::default().apply(patch)
    }
}

fn overlay<T>(field: &mut Option<T>, change: Option<Option<T>>) {
    if let Some(value) = change {
        *field = value;
    }
}
