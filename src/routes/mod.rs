//! HTTP routes for the probe.
//!
//! A single route is defined: `GET /` returns the instance's fixed status
//! body. Every other path falls through to Axum's default 404 handling, and
//! other methods on `/` get the default 405 — the probe defines no custom
//! fallbacks.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL, SERVER};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_STATUS, SERVER_IDENT};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the status route and response headers.
pub fn create_router(state: AppState) -> Router {
    // Status endpoint - never cached, the pipeline needs a live answer
    let status_routes = Router::new().route("/", get(status::status)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATUS),
        ),
    );

    Router::new()
        .merge(status_routes)
        .with_state(state)
        // Identify the probe build on every response, 404s included
        .layer(SetResponseHeaderLayer::if_not_present(
            SERVER,
            HeaderValue::from_static(SERVER_IDENT),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
