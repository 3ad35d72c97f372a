//! DTOs for the author resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::extract::RequiredParam;
use crate::domain::entities::Author;

/// Fields accepted under the `author` key of `POST /authors`.
#[derive(Debug, Deserialize)]
pub struct AuthorParams {
    #[serde(default)]
    pub name: Option<String>,
}

impl RequiredParam for AuthorParams {
    const KEY: &'static str = "author";
}

/// JSON representation of an author.
#[derive(Debug, Serialize)]
pub struct AuthorItem {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Author> for AuthorItem {
    fn from(a: Author) -> Self {
        AuthorItem {
            id: a.id,
            name: a.name,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Response for `GET /authors`.
#[derive(Debug, Serialize)]
pub struct AuthorListResponse {
    pub total_authors: usize,
    pub list: Vec<AuthorItem>,
}
