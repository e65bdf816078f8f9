//! Process configuration, read once at startup.

use std::net::SocketAddr;

use anyhow::Context;
use secrecy::SecretString;

/// Admin REST API version used when `SHOPIFY_API_VERSION` is unset.
pub const DEFAULT_API_VERSION: &str = "2023-10";

/// Listen address used when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Where and how to reach the store's Admin API.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    /// Store domain (`your-shop.myshopify.com`), or a full base URL with scheme.
    pub store_url: String,
    pub access_token: SecretString,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn new(store_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            access_token: SecretString::from(access_token.into()),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Store base URL. A bare domain is served over https.
    pub fn base_url(&self) -> String {
        let store = self.store_url.trim_end_matches('/');
        if store.contains("://") {
            store.to_string()
        } else {
            format!("https://{store}")
        }
    }

    /// Product creation endpoint.
    pub fn products_url(&self) -> String {
        format!("{}/admin/api/{}/products.json", self.base_url(), self.api_version)
    }
}

/// Full relay configuration.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub bind_addr: SocketAddr,
    pub shopify: ShopifyConfig,
}

impl RelayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing store URL or token only warn: requests will then fail upstream
    /// and surface through the normal error responses.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_url = var("SHOPIFY_STORE_URL").unwrap_or_else(|| {
            tracing::warn!("SHOPIFY_STORE_URL not set; product creation will fail");
            String::new()
        });
        let access_token = var("SHOPIFY_ACCESS_TOKEN").unwrap_or_else(|| {
            tracing::warn!("SHOPIFY_ACCESS_TOKEN not set; product creation will fail");
            String::new()
        });
        let api_version = var("SHOPIFY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("invalid BIND_ADDR {bind_addr:?}"))?;

        Ok(Self {
            bind_addr,
            shopify: ShopifyConfig::new(store_url, access_token).with_api_version(api_version),
        })
    }
}
