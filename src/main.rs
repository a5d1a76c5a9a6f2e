//! Contact Book Service
//!
//! A small contact-management service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │               CONTACT BOOK SERVICE             │
//!                    │                                                │
//!   Browser client   │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ contacts │──▶│  contacts  │  │
//!                    │  │ server  │   │ service  │   │   store    │  │
//!                    │  └─────────┘   └──────────┘   └─────┬──────┘  │
//!                    │       │                              │         │
//!                    │       ▼                              ▼         │
//!                    │  ┌─────────┐                   ┌──────────┐   │
//!   JSON envelopes   │  │   ui    │                   │  SQLite  │   │
//!   ◀────────────────┼──│ assets  │                   │  table   │   │
//!                    │  └─────────┘                   └──────────┘   │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                    │  │  │ config │ │observability│ │ shutdown │ │ │
//!                    │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use contact_book::config::loader;
use contact_book::contacts::{ContactService, ContactStore};
use contact_book::http::HttpServer;
use contact_book::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A .env file may carry PORT / DATABASE_URL during development.
    dotenvy::dotenv().ok();

    logging::init();
    tracing::info!("contact-book v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loader::load()?;
    tracing::info!(
        bind_address = %config.server.bind_address,
        database_url = %config.database.url,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = ContactStore::connect(&config.database).await?;
    tracing::info!("Contact store ready");

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let server = HttpServer::new(config, ContactService::new(store));
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
