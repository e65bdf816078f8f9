use anyhow::Context;

use listing_relay_api::config::RelayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    listing_relay_observability::init();

    let config = RelayConfig::from_env()?;
    let app = listing_relay_api::app::build_app(config.shopify);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
