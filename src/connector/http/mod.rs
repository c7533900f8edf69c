//! Web server exposing the verification endpoint and the browser UI.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::VerifyNewsUseCase;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub verify_use_case: Arc<VerifyNewsUseCase>,
}

impl AppState {
    pub fn new(verify_use_case: Arc<VerifyNewsUseCase>) -> Self {
        Self { verify_use_case }
    }
}

/// Start the web server and run until Ctrl-C.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
