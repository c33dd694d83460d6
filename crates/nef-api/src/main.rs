//! NEF API Server
//!
//! REST API server for named entity extraction.
//!
//! Author: hephaex@gmail.com

use nef_api::{create_router, state::AppState};
use nef_core::{AppConfig, LoggingConfig};
use nef_extractor::GazetteerModel;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (NEF_CONFIG points at an optional TOML file)
    let config_path = std::env::var_os("NEF_CONFIG").map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    init_tracing(&config.logging);

    // Load the entity model
    let model = GazetteerModel::from_config(&config.model)?;
    tracing::info!(
        language = model.language(),
        entries = model.entries().len(),
        "Gazetteer model loaded"
    );

    let addr = config.bind_addr();

    // Create application state and router
    let state = Arc::new(AppState::new(config, Arc::new(model)));
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("NEF API Server starting on http://{}", addr);
    tracing::info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("NEF API Server stopped");
    Ok(())
}

/// Initialize tracing; `RUST_LOG` takes precedence over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "nef_api={level},nef_extractor={level},tower_http={level}",
            level = logging.level
        ))
    });

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
