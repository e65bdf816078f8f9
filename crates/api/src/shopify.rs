//! Shopify Admin REST client (product creation only).

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use listing_relay_core::ProductPayload;

use crate::config::ShopifyConfig;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// The product Shopify reports back after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
struct CreateProductResponse {
    product: CreatedProduct,
}

#[derive(Debug, thiserror::Error)]
pub enum ShopifyError {
    #[error("store URL not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(String),
    /// The call completed but Shopify answered with a non-success status.
    #[error("Shopify API error ({status}): {details}")]
    Rejected { status: u16, details: Value },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for creating products in one store.
///
/// Holds a pooled `reqwest::Client`; cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    products_url: Option<String>,
    access_token: SecretString,
}

impl ShopifyClient {
    pub fn new(config: &ShopifyConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: &ShopifyConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            products_url: (!config.store_url.trim().is_empty()).then(|| config.products_url()),
            access_token: config.access_token.clone(),
        }
    }

    /// `None` when no store is configured.
    pub fn products_url(&self) -> Option<&str> {
        self.products_url.as_deref()
    }

    /// Create a product. Exactly one request is made; there are no retries.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<CreatedProduct, ShopifyError> {
        let url = self.products_url.as_deref().ok_or(ShopifyError::NotConfigured)?;

        let resp = self
            .http
            .post(url)
            .header(ACCESS_TOKEN_HEADER, self.access_token.expose_secret())
            .json(payload)
            .send()
            .await
            .map_err(|e| ShopifyError::Network(e.to_string()))?;

        let status = resp.status();
        let body: Value = resp.json().await.map_err(|e| ShopifyError::Parse(e.to_string()))?;

        if !status.is_success() {
            return Err(ShopifyError::Rejected {
                status: status.as_u16(),
                details: body,
            });
        }

        let created: CreateProductResponse =
            serde_json::from_value(body).map_err(|e| ShopifyError::Parse(e.to_string()))?;
        Ok(created.product)
    }
}
