//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use bluejays_storefront::config::StoreConfig;
use bluejays_storefront::http::HttpServer;
use bluejays_storefront::lifecycle::Shutdown;

/// A running storefront instance on an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestApp {
    /// Full URL for a path on this instance.
    pub fn endpoint(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Boot the server with default configuration.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_config(StoreConfig::default()).await
}

/// Boot the server with a custom configuration.
///
/// The listener is bound before the serve task is spawned, so the instance
/// accepts connections as soon as this returns.
pub async fn spawn_app_with_config(config: StoreConfig) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestApp { addr, shutdown }
}
