//! Persona profiles: the four visitor segments and the content bundle each one gets.
//!
//! `resolve` never fails: an unknown key degrades to the calm profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// Persona enum
// ────────────────────────────────────────────────────────────────────────────

/// The four fixed visitor segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Calm,
    Focus,
    Sleep,
    Energy,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Calm,
        Persona::Focus,
        Persona::Sleep,
        Persona::Energy,
    ];

    /// Lowercase wire key, as used in `?type=` and attachment filenames.
    pub fn key(&self) -> &'static str {
        match self {
            Persona::Calm => "calm",
            Persona::Focus => "focus",
            Persona::Sleep => "sleep",
            Persona::Energy => "energy",
        }
    }

    /// Exact, case-sensitive key match.
    pub fn from_key(key: &str) -> Option<Persona> {
        Persona::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn profile(&self) -> &'static PersonaProfile {
        match self {
            Persona::Calm => &CALM,
            Persona::Focus => &FOCUS,
            Persona::Sleep => &SLEEP,
            Persona::Energy => &ENERGY,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile table
// ────────────────────────────────────────────────────────────────────────────

/// Content bundle for one persona.
///
/// `techniques` holds catalogue keys, not display names. The compositor resolves
/// each key against a `TechniqueCatalogue` and skips keys it cannot find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaProfile {
    pub persona: Persona,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Printed on the guide cover.
    pub description: &'static str,
    /// Shown on the quiz result screen, which points at the guide.
    pub result_description: &'static str,
    pub techniques: &'static [&'static str],
}

static CALM: PersonaProfile = PersonaProfile {
    persona: Persona::Calm,
    title: "The Calm Seeker",
    subtitle: "The Calm Seeker's Path to Stillness",
    description: "Your nervous system is craving stillness. The techniques below focus on activating your parasympathetic response for deep, lasting calm.",
    result_description: "Your nervous system is craving stillness. The techniques in your personalized guide focus on activating your parasympathetic response for deep, lasting calm.",
    techniques: &["Box Breathing", "4-7-8 Method", "Coherent Breathing"],
};

static FOCUS: PersonaProfile = PersonaProfile {
    persona: Persona::Focus,
    title: "The Focus Builder",
    subtitle: "The Focus Builder's Guide to Clarity",
    description: "Mental clarity is your priority. These techniques sharpen attention and clear brain fog through rhythmic, energizing patterns.",
    result_description: "Mental clarity is your priority. Your guide emphasizes techniques that sharpen attention and clear brain fog through rhythmic, energizing patterns.",
    techniques: &["Kapalabhati", "Alternate Nostril", "Box Breathing"],
};

static SLEEP: PersonaProfile = PersonaProfile {
    persona: Persona::Sleep,
    title: "The Rest Restorer",
    subtitle: "The Rest Restorer's Sleep Protocol",
    description: "Quality sleep is within reach. These techniques are specifically designed to prepare your body and mind for deep, restorative rest.",
    result_description: "Quality sleep is within reach. Your personalized guide features techniques specifically designed to prepare your body and mind for deep, restorative rest.",
    techniques: &["4-7-8 Method", "Body Scan Breathing", "Extended Exhale"],
};

static ENERGY: PersonaProfile = PersonaProfile {
    persona: Persona::Energy,
    title: "The Energy Cultivator",
    subtitle: "The Energy Cultivator's Vitality System",
    description: "You're ready to elevate your vitality. These invigorating techniques naturally boost energy without caffeine or stimulants.",
    result_description: "You're ready to elevate your vitality. Your guide includes invigorating techniques that naturally boost energy without caffeine or stimulants.",
    techniques: &["Breath of Fire", "Energizing Kapalabhati", "Power Breathing"],
};

/// Maps a requested persona key to its profile, falling back to calm.
pub fn resolve(persona_key: &str) -> &'static PersonaProfile {
    match Persona::from_key(persona_key) {
        Some(persona) => persona.profile(),
        None => {
            debug!(requested = persona_key, "Unknown persona key, using default");
            Persona::default().profile()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persona_has_three_techniques() {
        for persona in Persona::ALL {
            let profile = resolve(persona.key());
            assert_eq!(
                profile.techniques.len(),
                3,
                "{} should list exactly 3 techniques",
                persona.key()
            );
        }
    }

    #[test]
    fn test_resolve_known_key_returns_matching_profile() {
        let profile = resolve("sleep");
        assert_eq!(profile.persona, Persona::Sleep);
        assert_eq!(profile.title, "The Rest Restorer");
    }

    #[test]
    fn test_resolve_unknown_key_falls_back_to_calm() {
        assert_eq!(resolve("bogus"), resolve("calm"));
        assert_eq!(resolve(""), resolve("calm"));
    }

    #[test]
    fn test_result_description_differs_from_cover_text() {
        for persona in Persona::ALL {
            let profile = persona.profile();
            assert!(!profile.result_description.is_empty());
            assert_ne!(profile.result_description, profile.description);
        }
        assert!(resolve("calm")
            .result_description
            .contains("your personalized guide"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve("FOCUS").persona, Persona::Calm);
    }

    #[test]
    fn test_key_round_trips_through_from_key() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_key(persona.key()), Some(persona));
        }
    }

    #[test]
    fn test_persona_serializes_lowercase() {
        let json = serde_json::to_string(&Persona::Energy).unwrap();
        assert_eq!(json, "\"energy\"");
    }
}
