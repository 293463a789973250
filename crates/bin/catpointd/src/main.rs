//! # catpointd: catpoint daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Construct the in-memory store and the virtual cat detector (adapters)
//! - Construct the security service, injecting them via port traits
//! - Register the event bus and log every status event
//! - Build the axum router and serve it
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use catpoint_adapter_http_axum::state::AppState;
use catpoint_adapter_virtual::{InMemorySecurityRepository, VirtualCatDetector};
use catpoint_app::event_bus::InProcessEventBus;
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::event::Event;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Adapters
    let repo = InMemorySecurityRepository::with_sensors(config.sensors()?);
    let detector = Arc::new(VirtualCatDetector::new(&config.camera));

    // Service
    let mut service = SecurityService::new(repo, detector);

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(config.events.capacity));
    tokio::spawn(log_events(event_bus.subscribe()));
    service.add_status_listener(event_bus.clone());

    // HTTP
    let state = AppState::new(service);
    let app = catpoint_adapter_http_axum::router::build_with_frame_limit(
        state,
        config.server.max_frame_bytes,
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, sensors = config.sensors.len(), "catpointd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("catpointd stopped");
    Ok(())
}

async fn log_events(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                tracing::info!(event_id = %event.id, kind = ?event.kind, "status event");
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log fell behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
