//! biztime server
//!
//! Usage: `biztime [config.yaml]` (or set `BIZTIME_CONFIG`).

use anyhow::Result;
use biztime::config::AppConfig;
use biztime::server::ServerBuilder;
use biztime::storage::InMemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BIZTIME_CONFIG").ok());
    let config = AppConfig::load(config_path.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let builder = with_configured_store(ServerBuilder::new(), &config).await?;
    builder.serve(&config.server.address()).await
}

#[cfg(feature = "postgres")]
async fn with_configured_store(
    builder: ServerBuilder,
    config: &AppConfig,
) -> Result<ServerBuilder> {
    use biztime::storage::{PostgresStore, ensure_schema};

    let Some(url) = config.database.url.as_deref() else {
        tracing::info!("No database configured, using the in-memory store");
        return Ok(builder.with_store(InMemoryStore::new()));
    };

    let store = PostgresStore::connect(url, config.database.max_connections).await?;
    ensure_schema(store.pool()).await?;
    tracing::info!("Connected to PostgreSQL");

    Ok(builder.with_store(store))
}

#[cfg(not(feature = "postgres"))]
async fn with_configured_store(
    builder: ServerBuilder,
    config: &AppConfig,
) -> Result<ServerBuilder> {
    if config.database.url.is_some() {
        tracing::warn!("database.url is ignored: built without the postgres feature");
    }
    tracing::info!("Using the in-memory store");

    Ok(builder.with_store(InMemoryStore::new()))
}
