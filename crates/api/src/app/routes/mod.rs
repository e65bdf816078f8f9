use axum::Router;

pub mod submissions;
pub mod system;

/// Router for the relay endpoints (everything except `/health`).
pub fn router() -> Router {
    Router::new().nest("/api", submissions::router())
}
