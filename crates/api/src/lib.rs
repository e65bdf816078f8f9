//! HTTP relay: accepts seller submissions and creates draft products in Shopify.

pub mod app;
pub mod config;
pub mod middleware;
pub mod shopify;
