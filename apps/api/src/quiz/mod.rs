//! Quiz Classifier: the five funnel questions and the decision table that turns
//! answers into a persona.
//!
//! Rule order matters: sleep wins over focus, focus over energy, and calm is the
//! fall-through.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::content::Persona;

// ────────────────────────────────────────────────────────────────────────────
// Question table
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    /// Field of `QuizAnswers` this question fills.
    pub key: &'static str,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "q1",
        key: "stress",
        question: "How would you describe your current stress level?",
        options: &[
            QuizOption { value: "high", label: "Constantly overwhelmed" },
            QuizOption { value: "moderate", label: "Manageable but present" },
            QuizOption { value: "low", label: "Generally calm" },
        ],
    },
    QuizQuestion {
        id: "q2",
        key: "sleep",
        question: "How is your sleep quality?",
        options: &[
            QuizOption { value: "poor", label: "I struggle to fall or stay asleep" },
            QuizOption { value: "okay", label: "It's okay, could be better" },
            QuizOption { value: "good", label: "I sleep well most nights" },
        ],
    },
    QuizQuestion {
        id: "q3",
        key: "experience",
        question: "What's your experience with breathwork?",
        options: &[
            QuizOption { value: "none", label: "Complete beginner" },
            QuizOption { value: "some", label: "Tried it a few times" },
            QuizOption { value: "regular", label: "I practice occasionally" },
        ],
    },
    QuizQuestion {
        id: "q4",
        key: "goal",
        question: "What's your primary goal?",
        options: &[
            QuizOption { value: "calm", label: "Reduce anxiety & find calm" },
            QuizOption { value: "focus", label: "Improve focus & clarity" },
            QuizOption { value: "sleep", label: "Better sleep" },
            QuizOption { value: "energy", label: "More natural energy" },
        ],
    },
    QuizQuestion {
        id: "q5",
        key: "time",
        question: "How much time can you dedicate daily?",
        options: &[
            QuizOption { value: "5", label: "5 minutes or less" },
            QuizOption { value: "10", label: "5-10 minutes" },
            QuizOption { value: "15", label: "10-15 minutes" },
            QuizOption { value: "20", label: "15+ minutes" },
        ],
    },
];

pub fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Answers as submitted. Missing fields are empty strings; values are not checked
/// against the option table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizAnswers {
    pub stress: String,
    pub sleep: String,
    pub experience: String,
    pub goal: String,
    pub time: String,
}

/// Maps answers to a persona. Only `goal`, `sleep` and `stress` are consulted.
pub fn classify(answers: &QuizAnswers) -> Persona {
    let goal = answers.goal.as_str();

    if goal == "sleep" || answers.sleep == "poor" {
        Persona::Sleep
    } else if goal == "focus" {
        Persona::Focus
    } else if goal == "energy" || answers.stress == "low" {
        Persona::Energy
    } else {
        Persona::Calm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(stress: &str, sleep: &str, goal: &str) -> QuizAnswers {
        QuizAnswers {
            stress: stress.to_string(),
            sleep: sleep.to_string(),
            goal: goal.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_questions_cover_every_answer_field() {
        let keys: Vec<&str> = questions().iter().map(|q| q.key).collect();
        assert_eq!(keys, vec!["stress", "sleep", "experience", "goal", "time"]);
    }

    #[test]
    fn test_goal_options_match_personas() {
        let goal = questions().iter().find(|q| q.key == "goal").unwrap();
        for option in goal.options {
            assert!(Persona::from_key(option.value).is_some(), "{}", option.value);
        }
    }

    #[test]
    fn test_classify_each_goal() {
        assert_eq!(classify(&answers("high", "good", "calm")), Persona::Calm);
        assert_eq!(classify(&answers("high", "good", "focus")), Persona::Focus);
        assert_eq!(classify(&answers("high", "good", "sleep")), Persona::Sleep);
        assert_eq!(classify(&answers("high", "good", "energy")), Persona::Energy);
    }

    #[test]
    fn test_poor_sleep_overrides_goal() {
        assert_eq!(classify(&answers("high", "poor", "focus")), Persona::Sleep);
        assert_eq!(classify(&answers("low", "poor", "energy")), Persona::Sleep);
    }

    #[test]
    fn test_focus_goal_beats_low_stress() {
        assert_eq!(classify(&answers("low", "okay", "focus")), Persona::Focus);
    }

    #[test]
    fn test_low_stress_with_calm_goal_is_energy() {
        assert_eq!(classify(&answers("low", "good", "calm")), Persona::Energy);
    }

    #[test]
    fn test_empty_answers_default_to_calm() {
        assert_eq!(classify(&QuizAnswers::default()), Persona::Calm);
    }

    #[test]
    fn test_answers_deserialize_with_missing_fields() {
        let parsed: QuizAnswers = serde_json::from_str(r#"{"goal":"sleep"}"#).unwrap();
        assert_eq!(parsed.goal, "sleep");
        assert_eq!(parsed.stress, "");
    }
}
