pub mod handlers;
pub mod models;
pub mod router;


use crate::players::PlayerStore;
use std::net::SocketAddr;
use std::sync::Arc;

/// Per-request context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerStore>,
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(players: impl PlayerStore + 'static) -> Self {
        Self {
            state: AppState {
                players: Arc::new(players),
            },
        }
    }

    /// Binds the server to the given port and serves until Ctrl+C.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let app = router::build(self.state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Starting server on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
