//! PDF renderer: replays an `AssembledDocument` onto a `printpdf` document.
//!
//! CPU-bound. Callers on the async side run it inside `tokio::task::spawn_blocking`.

use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};
use thiserror::Error;
use tracing::debug;

use crate::layout::canvas::{
    AssembledDocument, Color, DrawOp, Font, Page, PAGE_HEIGHT, PAGE_WIDTH,
};

const LAYER_NAME: &str = "Content";
const MM_PER_PT: f32 = 25.4 / 72.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document has no pages")]
    Empty,

    #[error("failed to load built-in font {font:?}: {message}")]
    Font { font: Font, message: String },

    #[error("failed to serialize PDF: {0}")]
    Serialize(String),
}

/// Serializes every page of `doc` into a single PDF byte buffer.
pub fn render_pdf(doc: &AssembledDocument) -> Result<Vec<u8>, RenderError> {
    let mut pages = doc.pages.iter();
    let first = pages.next().ok_or(RenderError::Empty)?;

    let (width, height) = (pt_to_mm(PAGE_WIDTH), pt_to_mm(PAGE_HEIGHT));
    let (pdf, page_idx, layer_idx) = PdfDocument::new(doc.title.as_str(), width, height, LAYER_NAME);
    let fonts = FontSet::load(&pdf)?;

    draw_page(&pdf.get_page(page_idx).get_layer(layer_idx), first, &fonts);
    for page in pages {
        let (page_idx, layer_idx) = pdf.add_page(width, height, LAYER_NAME);
        draw_page(&pdf.get_page(page_idx).get_layer(layer_idx), page, &fonts);
    }

    let bytes = pdf
        .save_to_bytes()
        .map_err(|e| RenderError::Serialize(format!("{e:?}")))?;

    debug!(
        persona = doc.persona.key(),
        pages = doc.page_count(),
        bytes = bytes.len(),
        "Guide rendered"
    );

    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Built-in font handles, embedded once per document.
struct FontSet {
    helvetica: IndirectFontRef,
    helvetica_bold: IndirectFontRef,
    times_italic: IndirectFontRef,
}

impl FontSet {
    fn load(pdf: &PdfDocumentReference) -> Result<Self, RenderError> {
        let add = |font: Font, builtin: BuiltinFont| {
            pdf.add_builtin_font(builtin)
                .map_err(|e| RenderError::Font {
                    font,
                    message: format!("{e:?}"),
                })
        };

        Ok(Self {
            helvetica: add(Font::Helvetica, BuiltinFont::Helvetica)?,
            helvetica_bold: add(Font::HelveticaBold, BuiltinFont::HelveticaBold)?,
            times_italic: add(Font::TimesItalic, BuiltinFont::TimesItalic)?,
        })
    }

    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.helvetica,
            Font::HelveticaBold => &self.helvetica_bold,
            Font::TimesItalic => &self.times_italic,
        }
    }
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &FontSet) {
    for op in &page.ops {
        match op {
            DrawOp::Text { text, x, y, style } => {
                layer.set_fill_color(pdf_color(style.color));
                layer.use_text(
                    text.as_str(),
                    style.size,
                    pt_to_mm(*x),
                    pt_to_mm(*y),
                    fonts.get(style.font),
                );
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                layer.set_fill_color(pdf_color(*color));
                layer.add_rect(Rect::new(
                    pt_to_mm(*x),
                    pt_to_mm(*y),
                    pt_to_mm(x + width),
                    pt_to_mm(y + height),
                ));
            }
        }
    }
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}
