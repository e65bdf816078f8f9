use crate::config::ShopifyConfig;
use crate::shopify::ShopifyClient;

/// Shared, read-only dependencies of the relay handlers.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub shopify: ShopifyClient,
}

pub fn build_services(config: &ShopifyConfig) -> AppServices {
    AppServices {
        shopify: ShopifyClient::new(config),
    }
}
