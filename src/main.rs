use std::path::Path;

use tokio::net::TcpListener;

use bluejays_storefront::config::{loader, StoreConfig};
use bluejays_storefront::http::HttpServer;
use bluejays_storefront::lifecycle::Shutdown;
use bluejays_storefront::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path as the only argument; defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => loader::load_config(Path::new(&path))?,
        None => StoreConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        service = "bluejays-storefront",
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    tracing::info!(
        bind_address = %config.listener.bind_address,
        relay_timeout_ms = config.relay.timeout_ms,
        relay_max_redirects = config.relay.max_redirects,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
