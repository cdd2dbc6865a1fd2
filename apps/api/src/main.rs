mod config;
mod content;
mod errors;
mod guide;
mod layout;
mod lead;
mod quiz;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::catalogue;
use crate::lead::{LeadSink, LoggingLeadSink};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Enso API v{}", env!("CARGO_PKG_VERSION"));

    // Build the technique catalogue up front rather than on the first guide request.
    info!("Technique catalogue loaded ({} records)", catalogue().len());

    // Lead sink (logging only until a CRM backend exists)
    let lead_sink: Arc<dyn LeadSink> = Arc::new(LoggingLeadSink);
    info!("Lead sink initialized (backend: {})", lead_sink.backend_name());

    let state = AppState {
        config: config.clone(),
        lead_sink,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
