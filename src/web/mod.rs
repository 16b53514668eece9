//! Server-rendered front end.

mod errors;
pub mod handlers;
pub mod router;
pub mod state;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerSettings;
use crate::utils::error::Result;

pub use router::create_router;
pub use state::AppState;

/// Binds `settings.bind` and serves until Ctrl-C.
pub async fn run(settings: &ServerSettings) -> Result<()> {
    let addr = settings.bind_addr()?;
    let state = AppState::with_upstream(settings.upstream_url.clone());
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Listening on http://{}", listener.local_addr()?);
    info!("🔗 Upstream: {}", settings.upstream_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
