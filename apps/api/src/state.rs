use std::sync::Arc;

use crate::config::Config;
use crate::lead::LeadSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable lead backend. Default: LoggingLeadSink.
    pub lead_sink: Arc<dyn LeadSink>,
}
