//! Domain entity representing a publishing house.

use chrono::{DateTime, Utc};

/// A publisher books are released under.
#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Publisher {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Validated input for creating a publisher.
#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: String,
}
