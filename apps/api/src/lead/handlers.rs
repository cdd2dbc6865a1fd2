//! Axum route handlers for lead capture.

use axum::{extract::State, Json};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::lead::{pdf_url_for, Lead};
use crate::state::AppState;

/// Lead fields as sent by the client. Nothing is validated: a field that is missing,
/// `null` or not a string never fails the request.
#[derive(Debug, Default)]
pub struct LeadRequest {
    pub email: String,
    pub variant: String,
    pub quiz_result: Option<String>,
    pub answers: Option<Value>,
}

impl LeadRequest {
    /// Reads fields from any JSON value. A non-object body yields empty fields;
    /// only `null` is rejected, since there is nothing to read fields from.
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        if body.is_null() {
            return Err(AppError::LeadCapture("request body is null".to_string()));
        }

        Ok(LeadRequest {
            email: text_field(body, "email").unwrap_or_default(),
            variant: text_field(body, "variant").unwrap_or_default(),
            quiz_result: text_field(body, "quizResult"),
            answers: body.get("answers").filter(|v| !v.is_null()).cloned(),
        })
    }
}

/// Strings pass through; numbers and booleans are stringified; `null`, arrays and
/// objects count as absent.
fn text_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub success: bool,
    pub lead_id: String,
    pub pdf_url: String,
}

/// POST /api/lead
///
/// Takes the raw body so a malformed payload becomes a lead-shaped 500 instead of
/// the extractor's default rejection.
pub async fn handle_capture_lead(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LeadResponse>, AppError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::LeadCapture(format!("invalid request body: {e}")))?;
    let request = LeadRequest::from_value(&body)?;

    let lead = Lead {
        email: request.email,
        variant: request.variant,
        quiz_result: request.quiz_result,
        answers: request.answers,
        captured_at: Utc::now(),
    };

    let lead_id = state
        .lead_sink
        .submit(&lead)
        .await
        .map_err(|e| AppError::LeadCapture(e.to_string()))?;

    let pdf_url = pdf_url_for(lead.quiz_result.as_deref(), &state.config.default_guide_url);

    Ok(Json(LeadResponse {
        success: true,
        lead_id,
        pdf_url,
    }))
}
