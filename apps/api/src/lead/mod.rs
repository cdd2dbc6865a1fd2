//! Lead capture: pluggable, trait-based sink for email leads from the quiz funnel.
//!
//! Default: `LoggingLeadSink` (writes one structured log line, no persistence).
//! A CRM or email-provider backend implements `LeadSink` and is swapped in at startup.
//!
//! `AppState` holds an `Arc<dyn LeadSink>`.

pub mod handlers;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::content::Persona;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// A captured lead. Nothing here is validated.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub email: String,
    /// Landing-page variant the visitor saw. Opaque.
    pub variant: String,
    pub quiz_result: Option<String>,
    /// Raw quiz answers, in whatever shape the client sent them.
    pub answers: Option<Value>,
    pub captured_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Sink trait
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Records the lead and returns its id.
    async fn submit(&self, lead: &Lead) -> Result<String, AppError>;

    /// Short backend identifier for logs.
    fn backend_name(&self) -> &'static str;
}

/// Logs the lead and hands back a timestamp-derived id.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingLeadSink;

#[async_trait]
impl LeadSink for LoggingLeadSink {
    async fn submit(&self, lead: &Lead) -> Result<String, AppError> {
        info!(
            email = %lead.email,
            variant = %lead.variant,
            quiz_result = lead.quiz_result.as_deref().unwrap_or("none"),
            has_answers = lead.answers.is_some(),
            timestamp = %lead.captured_at.to_rfc3339(),
            "Lead captured"
        );
        Ok(lead_id(lead.captured_at))
    }

    fn backend_name(&self) -> &'static str {
        "logging"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// `lead_<unix millis>`.
pub fn lead_id(captured_at: DateTime<Utc>) -> String {
    format!("lead_{}", captured_at.timestamp_millis())
}

/// Guide URL for a quiz result. Known personas get their personalized guide;
/// anything else (including no result) gets `default_url`.
pub fn pdf_url_for(quiz_result: Option<&str>, default_url: &str) -> String {
    match quiz_result.and_then(Persona::from_key) {
        Some(persona) => guide_url(persona),
        None => default_url.to_string(),
    }
}

pub fn guide_url(persona: Persona) -> String {
    format!("/api/guide?type={}", persona.key())
}
