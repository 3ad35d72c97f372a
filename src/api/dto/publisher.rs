//! DTOs for the publisher resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::extract::RequiredParam;
use crate::domain::entities::Publisher;

/// Fields accepted under the `publisher` key of `POST /publishers`.
#[derive(Debug, Deserialize)]
pub struct PublisherParams {
    #[serde(default)]
    pub name: Option<String>,
}

impl RequiredParam for PublisherParams {
    const KEY: &'static str = "publisher";
}

/// JSON representation of a publisher.
#[derive(Debug, Serialize)]
pub struct PublisherItem {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherItem {
    fn from(p: Publisher) -> Self {
        PublisherItem {
            id: p.id,
            name: p.name,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Response for `GET /publishers`.
#[derive(Debug, Serialize)]
pub struct PublisherListResponse {
    pub total_publishers: usize,
    pub list: Vec<PublisherItem>,
}
