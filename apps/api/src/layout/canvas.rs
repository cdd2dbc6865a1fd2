//! Page canvas model: absolute-positioned draw operations in PDF points.
#![allow(dead_code)]
//!
//! Coordinates follow PDF conventions: origin at the bottom-left, `y` grows upward.
//! The compositor writes `DrawOp`s here; the renderer replays them onto a real PDF.

use serde::Serialize;

use crate::content::Persona;

/// US letter, in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Fonts and colors
// ────────────────────────────────────────────────────────────────────────────

/// The three PDF built-in faces the guide uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    TimesItalic,
}

/// RGB color with 0.0 – 1.0 channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Brand palette.
pub mod palette {
    use super::Color;

    /// #292524
    pub const TEXT: Color = Color::rgb(0.16, 0.14, 0.14);
    /// #64748B
    pub const SLATE: Color = Color::rgb(0.39, 0.45, 0.55);
    /// #B45309
    pub const AMBER: Color = Color::rgb(0.71, 0.33, 0.04);
    pub const PATTERN_BOX: Color = Color::rgb(0.95, 0.95, 0.94);
}

// ────────────────────────────────────────────────────────────────────────────
// Draw operations
// ────────────────────────────────────────────────────────────────────────────

/// A text run's font, size and color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub size: f32,
    pub font: Font,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32, font: Font, color: Color) -> Self {
        Self { size, font, color }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
    /// Filled rectangle; `(x, y)` is the lower-left corner.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// One fixed-size page of draw operations, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            style,
        });
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    /// All text runs on the page, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rect { .. } => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Vertical write position for a single page. Only ever moves down.
#[derive(Debug, Clone, Copy)]
pub struct PageCursor {
    y: f32,
}

impl PageCursor {
    /// Starts `offset_from_top` points below the top edge.
    pub fn from_top(offset_from_top: f32) -> Self {
        Self {
            y: PAGE_HEIGHT - offset_from_top,
        }
    }

    /// Starts at an absolute `y`, for blocks pinned near the bottom edge.
    pub fn at(y: f32) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self, dy: f32) {
        self.y -= dy.max(0.0);
    }
}

/// The finished guide, ready for serialization. Lives for one request.
#[derive(Debug, Clone, Serialize)]
pub struct AssembledDocument {
    pub persona: Persona,
    pub title: String,
    pub pages: Vec<Page>,
}

impl AssembledDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_below_top_edge() {
        let cursor = PageCursor::from_top(100.0);
        assert_eq!(cursor.y(), 692.0);
    }

    #[test]
    fn test_cursor_never_moves_up() {
        let mut cursor = PageCursor::from_top(80.0);
        cursor.advance(20.0);
        cursor.advance(-50.0);
        assert_eq!(cursor.y(), 692.0);
    }

    #[test]
    fn test_page_texts_skips_rects() {
        let style = TextStyle::new(11.0, Font::Helvetica, palette::TEXT);
        let mut page = Page::new();
        page.text("first", MARGIN, 700.0, style);
        page.rect(MARGIN, 600.0, 100.0, 35.0, palette::PATTERN_BOX);
        page.text("second", MARGIN, 500.0, style);

        let texts: Vec<&str> = page.texts().collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(page.contains_text("sec"));
        assert!(!page.contains_text("third"));
    }
}
