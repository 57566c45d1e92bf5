use std::sync::Arc;

use acumen_api::api::{create_router, AppState};
use acumen_api::config::Config;
use acumen_api::services::providers::openai::OpenAiGenerator;
use acumen_api::store::ReviewStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acumen_api=debug,tower_http=debug".into()),
        )
        .init();

    // Configuration or dataset problems abort startup before the listener binds
    let config = Config::from_env()?;

    let store = Arc::new(ReviewStore::from_csv_path(&config.reviews_path)?);
    tracing::info!(
        records = store.len(),
        path = %config.reviews_path,
        "Review dataset loaded"
    );

    let generator = Arc::new(OpenAiGenerator::new(&config)?);
    let state = AppState::new(store, generator);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
