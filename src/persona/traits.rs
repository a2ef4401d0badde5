// src/persona/traits.rs

//! Personality trait extraction: five independent heuristic passes, each
//! producing one short descriptive label. Each pass is an explicit ordered
//! rule table — first matching rule wins — so the priority is part of the
//! contract, not an accident of control flow.

use serde::{Deserialize, Serialize};

use super::patterns::{average_chars, count_occurrences};

/// Above this average character length a participant reads as expansive,
/// regardless of punctuation habits.
pub const LONG_MESSAGE_CHARS: f64 = 100.0;

/// Question marks per message above this mark an inquisitive style.
pub const QUESTION_RATE_STYLE: f64 = 0.5;

/// Exclamation marks per message above this mark an energetic style.
pub const EXCLAMATION_RATE_STYLE: f64 = 0.5;

const POSITIVE_MARKERS: &[&str] = &[
    "love", "great", "awesome", "happy", "nice", "cool", "haha", "lol", ":)",
];

const NEGATIVE_MARKERS: &[&str] = &[
    "hate", "annoying", "angry", "sad", "ugh", "terrible", "worst", ":(",
];

// Reaction rule tables: (markers, label). Checked in order; every matching
// row contributes its label.
const REACTION_RULES: &[(&[&str], &str)] = &[
    (&["haha", "lol", "lmao", "\u{1F602}"], "laughs easily"),
    (&["wow", "omg", "no way", "whoa"], "reacts with open surprise"),
    (&["thanks", "thank you", "appreciate"], "quick to express thanks"),
];

const QUIRK_RULES: &[(&str, &str)] = &[
    ("...", "trails off with ellipses"),
    ("!!", "doubles up exclamation marks"),
    ("??", "stacks question marks"),
];

pub const DEFAULT_RESPONSE_PATTERNS: &str = "direct and to-the-point";
pub const DEFAULT_REACTIONS: &str = "measured, low-key reactions";
pub const DEFAULT_QUIRKS: &str = "no standout quirks";
pub const NEUTRAL_TONE: &str = "calm and even-keeled";
pub const MIXED_TONE: &str = "varies between positive and neutral";

/// The five trait labels that condition generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub emotional_tone: String,
    pub conversation_style: String,
    pub response_patterns: String,
    pub typical_reactions: String,
    pub unique_quirks: String,
}

impl PersonalityTraits {
    pub fn from_messages(texts: &[&str]) -> Self {
        Self {
            emotional_tone: emotional_tone(texts),
            conversation_style: conversation_style(texts),
            response_patterns: response_patterns(texts),
            typical_reactions: typical_reactions(texts),
            unique_quirks: unique_quirks(texts),
        }
    }

    /// Defaults for a participant with no history.
    pub fn neutral() -> Self {
        Self {
            emotional_tone: NEUTRAL_TONE.to_string(),
            conversation_style: "keeps it short and casual".to_string(),
            response_patterns: DEFAULT_RESPONSE_PATTERNS.to_string(),
            typical_reactions: DEFAULT_REACTIONS.to_string(),
            unique_quirks: DEFAULT_QUIRKS.to_string(),
        }
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

/// Whole-word check, tolerant of surrounding punctuation.
fn has_word(texts: &[&str], word: &str) -> bool {
    texts.iter().any(|t| {
        t.split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .any(|token| token.eq_ignore_ascii_case(word))
    })
}

/// Majority vote over per-message positive/negative/neutral matches.
/// A tie between matched categories reads as mixed.
pub fn emotional_tone(texts: &[&str]) -> String {
    if texts.is_empty() {
        return NEUTRAL_TONE.to_string();
    }

    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;

    for text in texts {
        let lower = text.to_lowercase();
        let pos = contains_any(&lower, POSITIVE_MARKERS);
        let neg = contains_any(&lower, NEGATIVE_MARKERS);
        match (pos, neg) {
            (true, false) => positive += 1,
            (false, true) => negative += 1,
            // A message hitting both sets cancels itself out.
            _ => neutral += 1,
        }
    }

    if positive > negative && positive > neutral {
        "generally positive and upbeat".to_string()
    } else if negative > positive && negative > neutral {
        "often vents or pushes back".to_string()
    } else if neutral > positive && neutral > negative {
        NEUTRAL_TONE.to_string()
    } else {
        MIXED_TONE.to_string()
    }
}

/// Length rule is checked before the frequency rules, so every input gets
/// exactly one deterministic label.
pub fn conversation_style(texts: &[&str]) -> String {
    if texts.is_empty() {
        return "keeps it short and casual".to_string();
    }

    let n = texts.len() as f64;
    if average_chars(texts) > LONG_MESSAGE_CHARS {
        return "expansive, writes in full thoughts".to_string();
    }
    if count_occurrences(texts, "?") as f64 / n > QUESTION_RATE_STYLE {
        return "inquisitive, asks lots of questions".to_string();
    }
    if count_occurrences(texts, "!") as f64 / n > EXCLAMATION_RATE_STYLE {
        return "energetic and enthusiastic".to_string();
    }
    "keeps it short and casual".to_string()
}

pub fn response_patterns(texts: &[&str]) -> String {
    let mut found = Vec::new();

    let leads_with_hmm = texts.iter().any(|t| {
        t.trim_start()
            .to_lowercase()
            .starts_with("hmm")
    });
    if leads_with_hmm {
        found.push("thinks out loud before answering");
    }
    if has_word(texts, "but") {
        found.push("weighs both sides when responding");
    }
    if has_word(texts, "actually") {
        found.push("adds corrections and clarifications");
    }

    if found.is_empty() {
        DEFAULT_RESPONSE_PATTERNS.to_string()
    } else {
        found.join("; ")
    }
}

pub fn typical_reactions(texts: &[&str]) -> String {
    let mut found = Vec::new();

    for (markers, label) in REACTION_RULES {
        let hit = texts
            .iter()
            .any(|t| contains_any(&t.to_lowercase(), markers));
        if hit {
            found.push(*label);
        }
    }

    if found.is_empty() {
        DEFAULT_REACTIONS.to_string()
    } else {
        found.join("; ")
    }
}

pub fn unique_quirks(texts: &[&str]) -> String {
    let mut found = Vec::new();

    for (pattern, label) in QUIRK_RULES {
        if texts.iter().any(|t| t.contains(pattern)) {
            found.push(*label);
        }
    }

    if found.is_empty() {
        DEFAULT_QUIRKS.to_string()
    } else {
        found.join("; ")
    }
}
