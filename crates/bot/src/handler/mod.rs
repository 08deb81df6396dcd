mod health;

pub use self::health::{HealthResponse, health_routes};

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::broadcast};
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct AppRouter;

impl AppRouter {
    pub fn router(state: Arc<AppState>) -> Router {
        health_routes(state).layer(TraceLayer::new_for_http())
    }

    pub async fn serve(
        port: u16,
        state: Arc<AppState>,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<()> {
        let app = Self::router(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Health server running on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("HTTP server received shutdown signal");
            })
            .await
            .context("HTTP server failed")
    }
}
