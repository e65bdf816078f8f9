//! `listing-relay-core` — seller submissions and the draft products built from them.
//!
//! This crate contains **pure domain** logic (no HTTP, no environment access).

pub mod error;
pub mod id;
pub mod product;
pub mod submission;

pub use error::{SubmissionError, SubmissionResult};
pub use id::SubmissionId;
pub use product::{DraftProduct, InventoryPolicy, ProductImage, ProductPayload, ProductStatus, Variant};
pub use submission::{Price, SellerTag, Submission, SubmissionRequest};
