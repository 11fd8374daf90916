use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::modules::exercise::adapters::outbound::log_store_in_memory::InMemoryLogStore;
use exercise_tracker::modules::exercise::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use exercise_tracker::shell::config::AppConfig;
use exercise_tracker::shell::http::router;
use exercise_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // In-memory stores for now
    let users = Arc::new(InMemoryUserStore::new());
    let logs = Arc::new(InMemoryLogStore::new());
    let state = AppState::new(users, logs);

    let app = router(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Exercise tracker listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
