//! Page Compositor: lays out the personalized breathwork guide.
//!
//! # Page order
//! 1. Cover (persona-specific)
//! 2. The Science of Breath (fixed)
//! 3. One page per technique the catalogue can resolve, in profile order
//! 4. Quick Reference Card (fixed table + schedule built from the first techniques)
//!
//! Every page owns a `PageCursor` that only moves down. Placement is absolute and
//! there is no overflow check: content comes from the static tables, not user input.

use tracing::{debug, warn};

use crate::content::{PersonaProfile, TechniqueCatalogue, TechniqueRecord};
use crate::layout::canvas::{
    palette, AssembledDocument, Font, Page, PageCursor, TextStyle, MARGIN, PAGE_WIDTH,
};
use crate::layout::wrap::wrap;

/// Wrap budget for the cover description.
pub const COVER_WRAP_CHARS: usize = 70;
/// Wrap budget for the science page intro.
pub const SCIENCE_WRAP_CHARS: usize = 75;

/// Bottom-pinned footer baseline shared by the cover and quick-reference pages.
const FOOTER_Y: f32 = 80.0;
/// Left edge of the second column on the quick-reference page.
const COLUMN_X: f32 = 300.0;
/// Left edge of the AM column in the 7-day schedule.
const SCHEDULE_AM_X: f32 = 120.0;

// ────────────────────────────────────────────────────────────────────────────
// Text styles
// ────────────────────────────────────────────────────────────────────────────

const WORDMARK: TextStyle = TextStyle::new(32.0, Font::HelveticaBold, palette::TEXT);
const PAGE_TITLE: TextStyle = TextStyle::new(24.0, Font::HelveticaBold, palette::TEXT);
const TECHNIQUE_TITLE: TextStyle = TextStyle::new(22.0, Font::HelveticaBold, palette::TEXT);
const SECTION: TextStyle = TextStyle::new(14.0, Font::HelveticaBold, palette::TEXT);
const LABEL: TextStyle = TextStyle::new(12.0, Font::HelveticaBold, palette::TEXT);
const ACCENT_LABEL: TextStyle = TextStyle::new(12.0, Font::HelveticaBold, palette::AMBER);
const PATTERN: TextStyle = TextStyle::new(13.0, Font::HelveticaBold, palette::TEXT);
const BODY: TextStyle = TextStyle::new(12.0, Font::Helvetica, palette::SLATE);
const BODY_DARK: TextStyle = TextStyle::new(12.0, Font::Helvetica, palette::TEXT);
const SMALL: TextStyle = TextStyle::new(11.0, Font::Helvetica, palette::SLATE);
const SMALL_DARK: TextStyle = TextStyle::new(11.0, Font::Helvetica, palette::TEXT);
const SMALL_BOLD: TextStyle = TextStyle::new(11.0, Font::HelveticaBold, palette::TEXT);
const SMALL_ACCENT: TextStyle = TextStyle::new(11.0, Font::Helvetica, palette::AMBER);
const FINE: TextStyle = TextStyle::new(10.0, Font::Helvetica, palette::SLATE);
const FINE_BOLD: TextStyle = TextStyle::new(10.0, Font::HelveticaBold, palette::TEXT);
const FINE_QUOTE: TextStyle = TextStyle::new(10.0, Font::TimesItalic, palette::SLATE);
const COPYRIGHT: TextStyle = TextStyle::new(9.0, Font::Helvetica, palette::SLATE);

// ────────────────────────────────────────────────────────────────────────────
// Static page content
// ────────────────────────────────────────────────────────────────────────────

const COVER_EPIGRAPH: &str = "\"Master your breath. Master your life.\"";

const SCIENCE_INTRO: &str = "You take approximately 20,000 breaths every day. Unlike heart rate or digestion, breathing is the ONE autonomic function you can consciously control. This makes it a direct lever to shift your nervous system state.";

const SYMPATHETIC: &[&str] = &[
    "Fast, shallow breathing",
    "Elevated heart rate",
    "Stress hormones released",
    "Useful for emergencies, harmful when chronic",
];

const PARASYMPATHETIC: &[&str] = &[
    "Slow, deep breathing",
    "Lowered heart rate",
    "Calming hormones released",
    "Where healing and recovery happen",
];

const GOLDEN_RULES: &[&str] = &[
    "Longer exhales = Calm (parasympathetic)",
    "Longer inhales = Energy (sympathetic)",
    "Equal inhales/exhales = Balance",
];

/// Situation -> technique rows. Independent of the persona.
const QUICK_REFERENCE: &[(&str, &str)] = &[
    ("Can't fall asleep", "4-7-8 Breathing"),
    ("Anxious before a meeting", "Box Breathing"),
    ("Panic attack / acute stress", "Physiological Sigh"),
    ("Daily calm practice", "Coherent Breathing"),
    ("Need mental clarity", "Alternate Nostril"),
    ("Need energy boost", "Breath of Fire"),
];

const CLOSING_EPIGRAPH: &[&str] = &[
    "\"When the breath wanders, the mind also is unsteady.",
    "But when the breath is calmed, the mind too will be still.\"",
];
const CLOSING_ATTRIBUTION: &str = "— Hatha Yoga Pradipika";
const COPYRIGHT_LINE: &str = "© 2024 Enso Breathwork";

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Builds the full guide for `profile`.
///
/// Technique keys missing from `catalogue` are skipped: no page and no placeholder.
/// The result always has `2 + resolved techniques + 1` pages.
pub fn compose(profile: &PersonaProfile, catalogue: &TechniqueCatalogue) -> AssembledDocument {
    let mut pages = Vec::with_capacity(profile.techniques.len() + 3);

    pages.push(cover_page(profile));
    pages.push(science_page());

    for key in profile.techniques {
        match catalogue.get(key) {
            Some(record) => pages.push(technique_page(record)),
            None => warn!(
                persona = profile.persona.key(),
                technique = *key,
                "Technique missing from catalogue, page omitted"
            ),
        }
    }

    pages.push(quick_reference_page(profile));

    debug!(
        persona = profile.persona.key(),
        pages = pages.len(),
        "Guide composed"
    );

    AssembledDocument {
        persona: profile.persona,
        title: format!("Enso Breathwork Guide - {}", profile.title),
        pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pages
// ────────────────────────────────────────────────────────────────────────────

fn cover_page(profile: &PersonaProfile) -> Page {
    let mut page = Page::new();
    let mut cursor = PageCursor::from_top(100.0);

    page.text("ENSO", MARGIN, cursor.y(), WORDMARK);
    cursor.advance(150.0);

    page.text(
        "Your Personalized",
        MARGIN,
        cursor.y(),
        TextStyle::new(14.0, Font::Helvetica, palette::SLATE),
    );
    cursor.advance(40.0);
    page.text(
        "Breathwork Guide",
        MARGIN,
        cursor.y(),
        TextStyle::new(36.0, Font::HelveticaBold, palette::TEXT),
    );
    cursor.advance(50.0);

    page.text(
        profile.subtitle,
        MARGIN,
        cursor.y(),
        TextStyle::new(18.0, Font::TimesItalic, palette::AMBER),
    );
    cursor.advance(80.0);

    for line in wrap(profile.description, COVER_WRAP_CHARS) {
        page.text(line, MARGIN, cursor.y(), BODY);
        cursor.advance(18.0);
    }

    cursor.advance(40.0);
    page.text("Recommended Techniques:", MARGIN, cursor.y(), LABEL);
    cursor.advance(25.0);

    // The cover lists every key the profile names, resolved or not.
    for key in profile.techniques {
        page.text(format!("• {key}"), MARGIN + 10.0, cursor.y(), BODY_DARK);
        cursor.advance(20.0);
    }

    page.text(
        COVER_EPIGRAPH,
        MARGIN,
        FOOTER_Y,
        TextStyle::new(11.0, Font::TimesItalic, palette::SLATE),
    );

    page
}

fn science_page() -> Page {
    let mut page = Page::new();
    let mut cursor = PageCursor::from_top(80.0);

    page.text("The Science of Breath", MARGIN, cursor.y(), PAGE_TITLE);
    cursor.advance(40.0);

    for line in wrap(SCIENCE_INTRO, SCIENCE_WRAP_CHARS) {
        page.text(line, MARGIN, cursor.y(), SMALL);
        cursor.advance(16.0);
    }

    cursor.advance(20.0);
    page.text("Your Two Nervous System Modes:", MARGIN, cursor.y(), SECTION);
    cursor.advance(30.0);

    nervous_system_mode(
        &mut page,
        &mut cursor,
        "1. Sympathetic (Fight or Flight)",
        SYMPATHETIC,
    );
    cursor.advance(15.0);
    nervous_system_mode(
        &mut page,
        &mut cursor,
        "2. Parasympathetic (Rest & Digest)",
        PARASYMPATHETIC,
    );

    cursor.advance(25.0);
    page.text("The Golden Rule:", MARGIN, cursor.y(), SECTION);
    cursor.advance(25.0);

    for (i, rule) in GOLDEN_RULES.iter().enumerate() {
        if i > 0 {
            cursor.advance(18.0);
        }
        page.text(format!("• {rule}"), MARGIN + 10.0, cursor.y(), SMALL_DARK);
    }

    page
}

fn nervous_system_mode(page: &mut Page, cursor: &mut PageCursor, label: &str, items: &[&str]) {
    page.text(label, MARGIN, cursor.y(), ACCENT_LABEL);
    cursor.advance(18.0);
    for item in items {
        page.text(format!("   • {item}"), MARGIN, cursor.y(), FINE);
        cursor.advance(15.0);
    }
}

fn technique_page(record: &TechniqueRecord) -> Page {
    let mut page = Page::new();
    let mut cursor = PageCursor::from_top(80.0);

    page.text(record.name, MARGIN, cursor.y(), TECHNIQUE_TITLE);
    cursor.advance(30.0);
    page.text(
        format!("Best For: {}", record.best_for),
        MARGIN,
        cursor.y(),
        SMALL_ACCENT,
    );

    cursor.advance(40.0);
    page.text("The Pattern:", MARGIN, cursor.y(), SECTION);
    cursor.advance(25.0);

    // Highlight box spans the text column; the pattern sits inside it.
    page.rect(
        MARGIN,
        cursor.y() - 25.0,
        PAGE_WIDTH - MARGIN * 2.0,
        35.0,
        palette::PATTERN_BOX,
    );
    page.text(record.pattern, MARGIN + 15.0, cursor.y() - 15.0, PATTERN);

    cursor.advance(60.0);
    page.text("Instructions:", MARGIN, cursor.y(), SECTION);
    cursor.advance(25.0);

    for (i, step) in record.instructions.iter().enumerate() {
        page.text(
            format!("{}. {step}", i + 1),
            MARGIN + 10.0,
            cursor.y(),
            SMALL,
        );
        cursor.advance(22.0);
    }

    page
}

fn quick_reference_page(profile: &PersonaProfile) -> Page {
    let mut page = Page::new();
    let mut cursor = PageCursor::from_top(80.0);

    page.text("Quick Reference Card", MARGIN, cursor.y(), PAGE_TITLE);
    cursor.advance(40.0);
    page.text("When to Use What:", MARGIN, cursor.y(), SECTION);
    cursor.advance(30.0);

    for (situation, technique) in QUICK_REFERENCE {
        page.text(format!("• {situation}"), MARGIN + 10.0, cursor.y(), SMALL);
        page.text(format!("> {technique}"), COLUMN_X, cursor.y(), SMALL_BOLD);
        cursor.advance(22.0);
    }

    cursor.advance(30.0);
    page.text("Your 7-Day Schedule:", MARGIN, cursor.y(), SECTION);
    cursor.advance(25.0);

    for [day, am, pm] in weekly_schedule(profile) {
        page.text(day, MARGIN + 10.0, cursor.y(), FINE_BOLD);
        page.text(am, SCHEDULE_AM_X, cursor.y(), FINE);
        page.text(pm, COLUMN_X, cursor.y(), FINE);
        cursor.advance(20.0);
    }

    let mut footer = PageCursor::at(FOOTER_Y);
    for line in CLOSING_EPIGRAPH {
        page.text(*line, MARGIN, footer.y(), FINE_QUOTE);
        footer.advance(14.0);
    }
    page.text(CLOSING_ATTRIBUTION, MARGIN, footer.y(), FINE);
    footer.advance(30.0);
    page.text(COPYRIGHT_LINE, MARGIN, footer.y(), COPYRIGHT);

    page
}

/// Day / AM / PM rows. Days 3-6 rotate through the profile's first three techniques;
/// the first and last rows are fixed.
pub(crate) fn weekly_schedule(profile: &PersonaProfile) -> Vec<[String; 3]> {
    let technique = |i: usize| profile.techniques.get(i).copied().unwrap_or("Box Breathing");

    vec![
        [
            "Day 1-2".to_string(),
            "Box Breathing (AM)".to_string(),
            "4-7-8 (PM)".to_string(),
        ],
        [
            "Day 3-4".to_string(),
            format!("{} (AM)", technique(0)),
            format!("{} (PM)", technique(1)),
        ],
        [
            "Day 5-6".to_string(),
            format!("{} (AM)", technique(1)),
            format!("{} (PM)", technique(2)),
        ],
        [
            "Day 7".to_string(),
            "Your choice (AM)".to_string(),
            "Your choice (PM)".to_string(),
        ],
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
