//! HTTP API server for the roast gateway

pub mod health;
pub mod roast;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::providers::RoastProvider;

/// Shared state for API handlers
pub struct ApiState {
    /// AI provider for captioning and synthesis.
    /// `None` when `OPENAI_API_KEY` is not configured; requests then fail
    /// with a configuration error rather than a downstream auth failure.
    pub provider: Option<Arc<dyn RoastProvider>>,
}

/// Build the router with all routes
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    let router = Router::new()
        .nest("/api", roast::router(state.clone()))
        .merge(health::router())
        .merge(health::ready_router(state));

    // CORS layer for cross-origin requests from the browser client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
    static_dir: Option<PathBuf>,
}

impl ApiServer {
    /// Create a new API server
    #[must_use]
    pub fn new(provider: Option<Arc<dyn RoastProvider>>, port: u16) -> Self {
        Self {
            state: Arc::new(ApiState { provider }),
            port,
            static_dir: None,
        }
    }

    /// Set the static files directory for serving the web client
    #[must_use]
    pub fn static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }

    fn build_router(&self) -> Router {
        let mut router = router(self.state.clone());

        // Serve the browser client if configured
        if let Some(static_dir) = &self.static_dir {
            let index_file = static_dir.join("index.html");
            let serve_dir = ServeDir::new(static_dir).not_found_service(ServeFile::new(&index_file));

            router = router.fallback_service(serve_dir);
            tracing::info!(path = %static_dir.display(), "serving static files");
        }

        router
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, self.build_router())
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}
