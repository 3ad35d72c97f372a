//! Pagination query parameters.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{Uri, request::Parts},
};

/// Query parameters for paginated listings.
///
/// `page` is read leniently: anything that is not a positive integer
/// (absent, `abc`, `0`, `-2`) selects the first page. When `page` is
/// repeated the last occurrence wins, so extraction never rejects a request.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Reads the last `page` pair of the URI's query string.
    pub fn from_uri(uri: &Uri) -> Self {
        let page = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| {
                pairs
                    .into_iter()
                    .rfind(|(key, _)| key == "page")
                    .map(|(_, value)| value)
            })
            .unwrap_or_default();

        Self { page }
    }

    /// The requested 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1)
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}
