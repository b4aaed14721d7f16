//! Chowd - restaurant catalog daemon

use anyhow::Result;
use chowd::{server, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Chowd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!(
        "Cache TTL {}s, scraper: {}",
        config.cache_timeout_secs,
        if config.use_dynamic_scraper { "store pages" } else { "blog" }
    );

    server::run(config).await
}
