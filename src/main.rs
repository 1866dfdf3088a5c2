use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vitaltrack::{AppState, Config, StateStore, load_state, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    fs::create_dir_all(&config.data_dir).await?;
    info!("storing dashboard data in {}", config.data_dir.display());

    // Load before binding so no request can write over unloaded data.
    let store = StateStore::file(&config.data_dir);
    let data = load_state(&store).await;
    info!(
        health = data.health.len(),
        workouts = data.workouts.len(),
        weight = data.weight.len(),
        "dashboard loaded"
    );

    let app = router(AppState::new(store, data));

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
