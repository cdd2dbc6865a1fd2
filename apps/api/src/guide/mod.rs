// Guide generation: resolve -> compose -> render.
// Composition and PDF serialization are CPU-bound and run inside spawn_blocking.

pub mod handlers;

use crate::content::{catalogue, resolve, Persona};
use crate::errors::AppError;
use crate::layout::compose;
use crate::render::render_pdf;

/// A rendered guide ready to send.
#[derive(Debug)]
pub struct RenderedGuide {
    pub persona: Persona,
    pub bytes: Vec<u8>,
}

impl RenderedGuide {
    /// `enso-<persona>-breathwork-guide.pdf`
    pub fn filename(&self) -> String {
        format!("enso-{}-breathwork-guide.pdf", self.persona.key())
    }
}

/// Builds the PDF guide for a requested persona key. Unknown keys get the calm guide.
pub async fn build_guide(persona_key: &str) -> Result<RenderedGuide, AppError> {
    let profile = resolve(persona_key);

    let bytes = tokio::task::spawn_blocking(move || {
        let doc = compose(profile, catalogue());
        render_pdf(&doc)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed rendering guide: {e}")))??;

    Ok(RenderedGuide {
        persona: profile.persona,
        bytes,
    })
}
