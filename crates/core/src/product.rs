//! Draft product payload in the Shopify Admin REST shape.

use serde::Serialize;

use crate::submission::{Price, Submission};

/// Product type given to every relayed listing.
pub const PRODUCT_TYPE: &str = "Seller Listing";

/// Stock assigned to the single default variant.
pub const DEFAULT_STOCK: u32 = 1;

/// Inventory tracker for the variant (Shopify's own).
pub const INVENTORY_MANAGEMENT: &str = "shopify";

/// Fixed tags preceding the seller tag.
pub const SUBMISSION_TAGS: [&str; 2] = ["seller_submission", "pending_approval"];

/// Publication status of the upstream product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
}

/// What the store does when the variant runs out of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryPolicy {
    Deny,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub price: Price,
    pub inventory_management: &'static str,
    pub inventory_policy: InventoryPolicy,
    pub inventory_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductImage {
    pub src: String,
}

/// The product record created upstream, pending manual approval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftProduct {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    pub vendor: String,
    pub product_type: &'static str,
    pub status: ProductStatus,
    pub variants: Vec<Variant>,
    pub images: Vec<ProductImage>,
    /// Comma-joined tag list, as the Admin REST API expects it.
    pub tags: String,
}

/// Request body for `POST /admin/api/<version>/products.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub product: DraftProduct,
}

impl From<Submission> for DraftProduct {
    fn from(sub: Submission) -> Self {
        let tags = format!("{}, seller:{}", SUBMISSION_TAGS.join(", "), sub.seller);

        Self {
            title: sub.title,
            body_html: sub.description,
            vendor: sub.vendor,
            product_type: PRODUCT_TYPE,
            status: ProductStatus::Draft,
            variants: vec![Variant {
                price: sub.price,
                inventory_management: INVENTORY_MANAGEMENT,
                inventory_policy: InventoryPolicy::Deny,
                inventory_quantity: DEFAULT_STOCK,
            }],
            images: sub.image_url.map(|src| ProductImage { src }).into_iter().collect(),
            tags,
        }
    }
}

impl From<Submission> for ProductPayload {
    fn from(sub: Submission) -> Self {
        Self {
            product: DraftProduct::from(sub),
        }
    }
}
