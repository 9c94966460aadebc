//! HTTP listener and graceful shutdown.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

/// Listen address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Serves `router` on the configured address until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn serve(config: &ServerConfig, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Server Running at http://{}/", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::select! {
        () = wait_for_ctrl_c() => tracing::info!("Received Ctrl+C"),
        () = wait_for_terminate() => tracing::info!("Received SIGTERM"),
    }
}

async fn wait_for_ctrl_c() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::warn!(%error, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn wait_for_terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut terminate) => {
            terminate.recv().await;
        }
        Err(error) => {
            tracing::warn!(%error, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_terminate() {
    std::future::pending::<()>().await;
}
