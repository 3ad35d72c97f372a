//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiter layer as applied to the API.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter.
///
/// # Limits
///
/// - **Rate**: one token replenished every `period_secs` seconds
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The client IP
/// is the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `period_secs` or `burst` is zero.
pub fn layer(period_secs: u64, burst: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        // `per_second` sets the replenish interval in seconds.
        .per_second(period_secs)
        .burst_size(burst)
        .finish()
        .context("Rate limit period and burst size must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
