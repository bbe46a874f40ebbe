use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use voyagesense_api::api::{AppState, create_router};
use voyagesense_api::config::Config;
use voyagesense_api::db;
use voyagesense_api::db::Cache;
use voyagesense_api::engine::Engine;
use voyagesense_api::services::{NarrativeService, VlogService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    // The catalog is read exactly once; the pool is released as soon as the
    // engine owns its in-memory copy. A missing, unreadable, or empty table
    // fails the boot here rather than surfacing per request.
    let pool = db::create_pool(&config.database_url).await?;
    let catalog = db::load_catalog(&pool).await?;
    pool.close().await;
    anyhow::ensure!(
        !catalog.is_empty(),
        "destination catalog is empty - run the data preparation pipeline first"
    );

    let engine = Engine::new(catalog);

    let redis_client = db::create_redis_client(&config.redis_url)?;
    let cache = Cache::new(redis_client);
    let narrative = NarrativeService::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    );
    let vlogs = VlogService::new(
        cache,
        config.youtube_api_key.clone(),
        config.youtube_api_url.clone(),
    );

    let state = AppState {
        engine: Arc::new(engine),
        narrative,
        vlogs,
    };
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
