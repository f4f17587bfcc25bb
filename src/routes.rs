//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Home page (public)
//! - `GET  /article/{slug}` - Article page (public)
//! - `GET  /health`         - Health check (public)
//! - `/admin/*`             - Admin console (cookie session required, except login)
//! - `/api/*`               - REST API (Bearer token required, except `POST /api/session`)
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, strictest on login
//! - **Authentication** - Bearer token (API) or cookie session (console)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::error::not_found_handler;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let api_login = api::routes::public_routes().layer(rate_limit::login_layer());

    let api_router = Router::new().merge(api_protected).merge(api_login);

    let admin_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::secure_layer());

    let admin_login = web::routes::login_routes().layer(rate_limit::login_layer());

    let admin_router = Router::new().merge(admin_protected).merge(admin_login);

    let site = web::routes::public_routes().layer(rate_limit::layer());

    let router = Router::new()
        .merge(site)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/admin", admin_router)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
