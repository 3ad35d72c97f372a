//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`        - Health check (not rate limited)
//! - `/books`, `/authors`, `/publishers` - Catalog API (rate limited per IP)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limiter applied to the catalog routes
pub fn app_router(state: AppState, rate_limit: RateLimitLayer) -> NormalizePath<Router> {
    let catalog_router = api::routes::catalog_routes().layer(rate_limit);

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(catalog_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
