use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use listing_relay_core::SubmissionError;

use crate::shopify::ShopifyError;

pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const UPSTREAM_REJECTED: &str = "Failed to create product in Shopify";
pub const INTERNAL: &str = "Internal Server Error";

/// Everything that can end a relay request without a created product.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Upstream(#[from] ShopifyError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MethodNotAllowed => json_error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED),
            RelayError::Submission(_) => json_error(StatusCode::BAD_REQUEST, MISSING_FIELDS),
            RelayError::Upstream(ShopifyError::Rejected { details, .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": UPSTREAM_REJECTED,
                    "details": details,
                })),
            )
                .into_response(),
            RelayError::Upstream(_) => json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL),
        }
    }
}

pub fn json_error(status: StatusCode, message: &'static str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Panic handler for `CatchPanicLayer`: logs and answers with the generic 500.
pub fn panic_to_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Server Error");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
}
