//! Countdown Timer - A single countdown timer served over HTTP
//! 
//! This is the main entry point for the countdown-timer server.

use std::sync::Arc;
use tokio::{net::TcpListener, sync::watch};
use tracing::{error, info};

use countdown_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the countdown background task
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let countdown = tokio::spawn(countdown_task(Arc::clone(&state), shutdown_rx));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /api/timer/status - Current countdown");
    info!("  POST /api/timer/start  - Start a countdown ({{minutes, seconds}})");
    info!("  POST /api/timer/stop   - Stop and clear the countdown");
    info!("  POST /api/timer/pause  - Pause or resume");
    info!("  POST /api/timer/reset  - Rewind to the last started duration");
    info!("  GET  /health           - Health check");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &result {
        error!("Server error: {}", e);
    }

    info!("Stopping countdown task");
    let _ = shutdown_tx.send(true);
    if let Err(e) = countdown.await {
        error!("Countdown task ended abnormally: {}", e);
    }

    info!("Server shutdown complete");
    result.map_err(Into::into)
}
