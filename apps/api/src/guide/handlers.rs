//! Axum route handlers for the guide download.

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::guide::build_guide;

#[derive(Debug, Deserialize)]
pub struct GuideQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/guide?type={calm|focus|sleep|energy}
///
/// Missing or unknown `type` serves the calm guide. Responds with the PDF as an
/// attachment named after the resolved persona.
pub async fn handle_get_guide(Query(query): Query<GuideQuery>) -> Result<Response, AppError> {
    let requested = query.kind.as_deref().unwrap_or_default();
    let guide = build_guide(requested).await?;

    info!(
        requested,
        persona = guide.persona.key(),
        bytes = guide.bytes.len(),
        "Serving guide"
    );

    let disposition = format!("attachment; filename=\"{}\"", guide.filename());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        guide.bytes,
    )
        .into_response())
}
