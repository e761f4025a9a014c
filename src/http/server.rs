//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, CORS)
//! - Serve on a bound listener until shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::{RelayConfig, StoreConfig};
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::signals;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub relay: RelayConfig,
}

/// HTTP server for the storefront API.
pub struct HttpServer {
    router: Router,
    config: StoreConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        let state = AppState {
            catalog: Arc::new(Catalog::with_seed_data()),
            relay: config.relay.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// CORS is permissive: the storefront answers any origin.
    fn build_router(config: &StoreConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/products", get(handlers::list_products))
            .route("/api/product-image", get(handlers::product_image))
            .route("/api/preview-url", post(handlers::preview_url))
            .route("/api/import-product", post(handlers::import_product))
            .route("/admin/users", get(handlers::admin_users))
            .route("/internal/config", get(handlers::internal_config))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after Ctrl+C or a [`Shutdown`](crate::lifecycle::Shutdown)
    /// trigger, whichever comes first.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown.recv() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
