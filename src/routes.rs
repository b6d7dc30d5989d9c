//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Service banner (public)
//! - `GET  /health`  - Health check with database ping (public)
//! - everything else - REST API (Bearer token required), see [`crate::api::routes`]
//! - unmatched paths  - 404 JSON, also behind the Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Browser access for the front-end
//! - **Authentication** - Bearer token on resource routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler, root_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::handler::Handler;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allow_origin` - origin allowed by CORS, `*` for any
pub fn app_router(state: AppState, cors_allow_origin: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_allow_origin))
}

/// The routed application without path normalization.
pub fn router(state: AppState, cors_allow_origin: &str) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api_router)
        .fallback(
            fallback_handler.layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .with_state(state)
        .layer(cors_layer(cors_allow_origin))
        .layer(tracing::layer())
}

/// Builds the CORS layer. An origin that is not a valid header value falls
/// back to allowing any origin.
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origin == "*" {
        return layer.allow_origin(Any);
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            ::tracing::warn!(origin, "Invalid CORS_ALLOW_ORIGIN, allowing any origin");
            layer.allow_origin(Any)
        }
    }
}
