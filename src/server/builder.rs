//! ServerBuilder for fluent API to build HTTP servers

use super::router::{build_company_routes, build_health_routes, build_invoice_routes};
use crate::core::Store;
use crate::handlers::AppState;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    store: Option<Arc<dyn Store>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store (required)
    pub fn with_store(mut self, store: impl Store + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set a store that is already shared elsewhere
    pub fn with_shared_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health routes
    /// - Company and invoice routes
    ///
    /// wrapped in a request tracing layer.
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("Store is required. Call .with_store()"))?;
        let state = AppState::new(store);

        let app = build_health_routes()
            .merge(build_company_routes(state.clone()))
            .merge(build_invoice_routes(state));

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
