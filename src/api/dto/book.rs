//! DTOs for the book resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::extract::RequiredParam;
use crate::domain::entities::{Book, BookPatch};
use crate::domain::pagination::Page;

/// Book fields accepted under the `book` key of create and update requests.
///
/// Unknown keys are ignored.
///
/// # Field semantics
///
/// - **Absent** → leave the stored value unchanged (update) or unset (create)
/// - **`null`** → clear the value
/// - **Value** → set the value
#[derive(Debug, Default, Deserialize)]
pub struct BookParams {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub title: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub genre: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub language: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub edition: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub place: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub year: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publisher_id: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub author_id: Option<Option<i64>>,
}

impl RequiredParam for BookParams {
    const KEY: &'static str = "book";
}

impl From<BookParams> for BookPatch {
    fn from(p: BookParams) -> Self {
        BookPatch {
            title: p.title,
            genre: p.genre,
            language: p.language,
            edition: p.edition,
            place: p.place,
            year: p.year,
            author_id: p.author_id,
            publisher_id: p.publisher_id,
        }
    }
}

/// JSON representation of a book.
#[derive(Debug, Serialize)]
pub struct BookItem {
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

impl From<Book> for BookItem {
    fn from(b: Book) -> Self {
        BookItem {
            id: b.id,
            title: b.title,
            genre: b.genre,
            language: b.language,
            edition: b.edition,
            place: b.place,
            year: b.year,
            author_id: b.author_id,
            publisher_id: b.publisher_id,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Response for `GET /books`.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub total_books: i64,
    pub list: Vec<BookItem>,
    /// `"<page> of <total_pages>"`
    pub pagination: String,
}

impl From<Page<Book>> for BookListResponse {
    fn from(page: Page<Book>) -> Self {
        let pagination = page.descriptor();
        let page = page.map(BookItem::from);

        BookListResponse {
            total_books: page.total,
            list: page.items,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_null_are_distinct() {
        let params: BookParams =
            serde_json::from_str(r#"{"title": null, "genre": "Poetry"}"#).unwrap();

        assert_eq!(params.title, Some(None));
        assert_eq!(params.genre, Some(Some("Poetry".to_string())));
        assert_eq!(params.year, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params: BookParams =
            serde_json::from_str(r#"{"title": "Ficciones", "isbn": "123", "id": 9}"#).unwrap();

        assert_eq!(params.title, Some(Some("Ficciones".to_string())));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<BookParams>(r#"{"year": "nineteen"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_patch() {
        let params: BookParams =
            serde_json::from_str(r#"{"author_id": 4, "publisher_id": null}"#).unwrap();
        let patch = BookPatch::from(params);

        assert_eq!(patch.author_id, Some(Some(4)));
        assert_eq!(patch.publisher_id, Some(None));
        assert!(patch.title.is_none());
    }
}
