//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared Shopify client
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: the relay's fixed JSON error bodies

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::ShopifyConfig;
use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(shopify: ShopifyConfig) -> Router {
    let services = Arc::new(services::build_services(&shopify));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::cors_middleware))
                .layer(CatchPanicLayer::custom(errors::panic_to_response)),
        )
}
