//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type PeerIpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for public pages.
///
/// # Limits
///
/// - **Rate**: 1 request replenished every 2 seconds
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address.
pub fn layer() -> PeerIpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(100)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a stricter rate limiter for the admin console and JSON API.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 30 requests
pub fn secure_layer() -> PeerIpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(1)
            .burst_size(30)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates the strictest rate limiter, for passphrase login endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request every 6 seconds
/// - **Burst**: 5 requests
///
/// # Example
///
/// ```rust,ignore
/// let login = Router::new()
///     .route("/session", post(login_handler))
///     .layer(rate_limit::login_layer());
/// ```
pub fn login_layer() -> PeerIpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(6)
            .burst_size(5)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
