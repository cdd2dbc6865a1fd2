#![allow(dead_code)]

//! Technique catalogue: instructional records for every breathing exercise a persona
//! may reference, keyed by catalogue key.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A single breathing exercise.
///
/// `key` is what persona profiles reference; `name` is what gets printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueRecord {
    pub key: &'static str,
    pub name: &'static str,
    pub best_for: &'static str,
    pub pattern: &'static str,
    pub instructions: &'static [&'static str],
}

/// Read-only lookup table from catalogue key to record.
#[derive(Debug, Clone, Default)]
pub struct TechniqueCatalogue {
    records: HashMap<&'static str, TechniqueRecord>,
}

impl TechniqueCatalogue {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TechniqueRecord>,
    {
        Self {
            records: records.into_iter().map(|r| (r.key, r)).collect(),
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, key: &str) -> Option<&TechniqueRecord> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The built-in catalogue, built once on first use.
pub fn catalogue() -> &'static TechniqueCatalogue {
    static CATALOGUE: Lazy<TechniqueCatalogue> =
        Lazy::new(|| TechniqueCatalogue::from_records(TECHNIQUES.iter().cloned()));
    &CATALOGUE
}

// ────────────────────────────────────────────────────────────────────────────
// Static records
// ────────────────────────────────────────────────────────────────────────────

const TECHNIQUES: &[TechniqueRecord] = &[
    TechniqueRecord {
        key: "Box Breathing",
        name: "Box Breathing",
        best_for: "Stress reduction, focus, balance",
        pattern: "Inhale 4s > Hold 4s > Exhale 4s > Hold 4s",
        instructions: &[
            "Sit comfortably with a straight spine",
            "Breathe in through your nose for 4 counts",
            "Hold your breath for 4 counts",
            "Exhale slowly through your nose for 4 counts",
            "Hold empty for 4 counts",
            "Repeat for 4-5 minutes",
        ],
    },
    TechniqueRecord {
        key: "4-7-8 Method",
        name: "4-7-8 Breathing",
        best_for: "Sleep, anxiety relief, instant calm",
        pattern: "Inhale 4s > Hold 7s > Exhale 8s",
        instructions: &[
            "Place tongue tip behind upper front teeth",
            "Exhale completely through your mouth",
            "Close mouth, inhale through nose for 4 counts",
            "Hold breath for 7 counts",
            "Exhale through mouth for 8 counts",
            "Repeat for 4 cycles",
        ],
    },
    TechniqueRecord {
        key: "Coherent Breathing",
        name: "Coherent Breathing",
        best_for: "HRV optimization, sustained calm",
        pattern: "Inhale 5s > Exhale 5s (no holds)",
        instructions: &[
            "Set a timer for 5-20 minutes",
            "Breathe in for 5 seconds",
            "Breathe out for 5 seconds",
            "Continue without pausing",
            "Keep the breath smooth and gentle",
        ],
    },
    TechniqueRecord {
        key: "Kapalabhati",
        name: "Kapalabhati (Skull Shining)",
        best_for: "Mental clarity, energy boost",
        pattern: "Quick exhales through nose, passive inhales",
        instructions: &[
            "Sit tall with relaxed shoulders",
            "Take a deep breath in",
            "Exhale sharply through nose, pulling navel in",
            "Let inhale happen passively",
            "Repeat 20-30 times",
            "Rest and breathe normally",
        ],
    },
    TechniqueRecord {
        key: "Alternate Nostril",
        name: "Alternate Nostril Breathing",
        best_for: "Mental clarity, balance, pre-meditation",
        pattern: "Left in > Hold > Right out > Right in > Hold > Left out",
        instructions: &[
            "Use right thumb to close right nostril",
            "Inhale through left nostril (4 counts)",
            "Close both nostrils, hold (4 counts)",
            "Release right, exhale through right (4 counts)",
            "Inhale through right (4 counts)",
            "Close both, hold (4 counts)",
            "Release left, exhale through left (4 counts)",
        ],
    },
    TechniqueRecord {
        key: "Body Scan Breathing",
        name: "Body Scan Breathing",
        best_for: "Pre-sleep relaxation, tension release",
        pattern: "Slow breaths while scanning body",
        instructions: &[
            "Lie down comfortably",
            "Take slow, deep breaths",
            "Focus attention on your feet",
            "Breathe into any tension you find",
            "Slowly move attention up through body",
            "Release tension with each exhale",
        ],
    },
    TechniqueRecord {
        key: "Extended Exhale",
        name: "Extended Exhale",
        best_for: "Calming, sleep preparation",
        pattern: "Inhale 4s > Exhale 6-8s",
        instructions: &[
            "Breathe in for 4 counts",
            "Exhale slowly for 6-8 counts",
            "Make exhale longer than inhale",
            "Keep breath smooth and gentle",
            "Continue for 5-10 minutes",
        ],
    },
    TechniqueRecord {
        key: "Breath of Fire",
        name: "Breath of Fire",
        best_for: "Energy, alertness, core activation",
        pattern: "Rapid equal inhales and exhales",
        instructions: &[
            "Sit tall with hands on knees",
            "Begin with rapid, equal breaths",
            "Pump navel with each exhale",
            "Keep chest still, breath through nose",
            "Start with 30 seconds",
            "Rest and repeat",
        ],
    },
    TechniqueRecord {
        key: "Energizing Kapalabhati",
        name: "Energizing Kapalabhati",
        best_for: "Morning energy, mental clarity",
        pattern: "Vigorous exhales, passive inhales",
        instructions: &[
            "Sit comfortably with spine straight",
            "Take a deep breath in",
            "Begin rapid, forceful exhales",
            "Pull navel toward spine on each exhale",
            "Do 3 rounds of 30 breaths",
            "Rest between rounds",
        ],
    },
    TechniqueRecord {
        key: "Power Breathing",
        name: "Power Breathing",
        best_for: "Pre-workout, energy boost",
        pattern: "Deep inhale > Strong exhale",
        instructions: &[
            "Stand or sit with good posture",
            "Inhale deeply through nose",
            "Exhale forcefully through mouth",
            "Engage core on exhale",
            "Repeat 10-20 times",
            "Notice the energy surge",
        ],
    },
];
