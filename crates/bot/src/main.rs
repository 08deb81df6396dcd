use anyhow::{Context, Result};
use bot::{
    command::{CommandDispatcher, bot_commands},
    handler::AppRouter,
    poller::UpdatePoller,
    state::AppState,
};
use shared::{
    config::Config,
    utils::{Logger, shutdown_signal},
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("bin-bot", config.is_dev);

    let state = Arc::new(AppState::new(config).context("Failed to create AppState")?);

    let chat_client = state.di_container.chat_client.clone();

    if let Err(e) = chat_client.set_my_commands(&bot_commands()).await {
        warn!("⚠️ Failed to register bot commands: {e}");
    }

    let (shutdown_tx, _) = broadcast::channel(1);

    let port = state.config.port;
    let http_state = state.clone();
    let http_shutdown_rx = shutdown_tx.subscribe();
    let http_handle = tokio::spawn(async move {
        if let Err(e) = AppRouter::serve(port, http_state, http_shutdown_rx).await {
            error!("❌ HTTP server failed: {e:#}");
        }
    });

    let poller = UpdatePoller::new(
        chat_client,
        CommandDispatcher::new(state.di_container.clone()),
        state.config.poll_timeout_secs,
    );
    let poller_handle = tokio::spawn(poller.run(shutdown_tx.subscribe()));

    let signal_shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        if let Err(e) = signal_shutdown_tx.send(()) {
            warn!("Failed to send shutdown signal: {}", e);
        }
    });

    info!("✅ BIN bot started");

    let mut shutdown_rx = shutdown_tx.subscribe();
    let _ = shutdown_rx.recv().await;

    info!("🛑 Shutting down...");

    let shutdown_timeout = tokio::time::Duration::from_secs(30);
    let shutdown_result = tokio::time::timeout(shutdown_timeout, async {
        let _ = tokio::join!(http_handle, poller_handle);
    })
    .await;

    match shutdown_result {
        Ok(_) => info!("✅ All tasks shutdown gracefully"),
        Err(_) => {
            warn!("⚠️  Shutdown timeout reached, forcing exit");
        }
    }

    info!("✅ BIN bot shutdown complete.");
    Ok(())
}
