//! HTTP server lifecycle

use tokio::net::TcpListener;
use tracing::info;

use crate::{routes::app, state::AppState};

/// Serves the API on a bound address until interrupted
pub struct ApiServer {
    address: String,
    state: AppState,
}

impl ApiServer {
    pub fn new(address: impl Into<String>, state: AppState) -> Self {
        Self {
            address: address.into(),
            state,
        }
    }

    /// Bind and serve until Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(&self.address).await?;
        info!("Scoring API listening on {}", listener.local_addr()?);

        axum::serve(listener, app(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
