//! Domain entity representing a book author.

use chrono::{DateTime, Utc};

/// A person books are attributed to.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Validated input for creating an author.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
}
