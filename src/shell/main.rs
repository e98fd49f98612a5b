use leave_requests::shell::config::Config;
use leave_requests::shell::http::router;
use leave_requests::shell::state::AppState;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    let seed = config.load_seed()?;
    tracing::info!(
        managers = seed.managers.len(),
        balances = seed.balances.len(),
        "directory and ledger seeded"
    );
    let state = AppState::in_memory(&seed);

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("Leave API listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
