use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tracing::Instrument;

use listing_relay_core::{ProductPayload, Submission, SubmissionId, SubmissionRequest};

use crate::app::errors::RelayError;
use crate::app::services::AppServices;
use crate::shopify::{CreatedProduct, ShopifyError};

pub fn router() -> Router {
    // Every method is routed here so the 405 body is ours, not the framework's.
    Router::new().route("/submit-product", any(submit_product))
}

pub async fn submit_product(
    Extension(services): Extension<Arc<AppServices>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method != Method::POST {
        return RelayError::MethodNotAllowed.into_response();
    }

    let submission_id = SubmissionId::new();
    let span = tracing::info_span!("submission", %submission_id);

    match relay(&services, &body).instrument(span).await {
        Ok(created) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Product created successfully",
                "product_id": created.id,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Validate, map, and create the draft product. One upstream call at most.
async fn relay(services: &AppServices, body: &[u8]) -> Result<CreatedProduct, RelayError> {
    let submission = Submission::validate(SubmissionRequest::from_slice(body)).inspect_err(|e| {
        tracing::warn!(field = e.field(), "rejected submission: missing required field");
    })?;

    let payload = ProductPayload::from(submission);

    match services.shopify.create_product(&payload).await {
        Ok(created) => {
            tracing::info!(product_id = created.id, "draft product created");
            Ok(created)
        }
        Err(e) => {
            match &e {
                ShopifyError::Rejected { status, details } => {
                    tracing::error!(status, %details, "Shopify API Error");
                }
                other => tracing::error!(error = %other, "Server Error"),
            }
            Err(e.into())
        }
    }
}
