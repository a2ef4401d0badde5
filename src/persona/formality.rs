// src/persona/formality.rs

//! Register classification: formal vs casual, by counting marker
//! occurrences across the whole corpus. The rule order is load-bearing —
//! first matching rule wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markers that pull a corpus toward the formal end.
pub const FORMAL_MARKERS: &[&str] = &[
    "please",
    "thank you",
    "regards",
    "sincerely",
    "appreciate",
    "would you mind",
];

/// Markers that pull a corpus toward the casual end.
pub const INFORMAL_MARKERS: &[&str] = &[
    "hey",
    "lol",
    "gonna",
    "wanna",
    "haha",
    "omg",
    "wassup",
    "yeah",
    "nah",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalityLevel {
    VeryFormal,
    SomewhatFormal,
    Casual,
    VeryCasual,
}

impl fmt::Display for FormalityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormalityLevel::VeryFormal => "very formal",
            FormalityLevel::SomewhatFormal => "somewhat formal",
            FormalityLevel::Casual => "casual",
            FormalityLevel::VeryCasual => "very casual",
        };
        write!(f, "{label}")
    }
}

/// Total occurrences of `markers` across all messages, case-insensitive.
fn marker_count(texts: &[&str], markers: &[&str]) -> usize {
    texts
        .iter()
        .map(|t| {
            let lower = t.to_lowercase();
            markers.iter().map(|m| lower.matches(m).count()).sum::<usize>()
        })
        .sum()
}

/// Classify the register of a corpus. Ordered rules:
///
/// 1. formal > 2 x informal  -> very formal
/// 2. formal > informal      -> somewhat formal
/// 3. informal > 2 x formal  -> very casual
/// 4. otherwise              -> casual
///
/// An empty corpus scores 0/0 and lands on `Casual` — never an error.
pub fn classify(texts: &[&str]) -> FormalityLevel {
    let formal = marker_count(texts, FORMAL_MARKERS);
    let informal = marker_count(texts, INFORMAL_MARKERS);

    if formal > 2 * informal {
        FormalityLevel::VeryFormal
    } else if formal > informal {
        FormalityLevel::SomewhatFormal
    } else if informal > 2 * formal {
        FormalityLevel::VeryCasual
    } else {
        FormalityLevel::Casual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_corpus_is_casual() {
        assert_eq!(classify(&[]), FormalityLevel::Casual);
    }

    #[test]
    fn formal_majority_without_doubling_is_somewhat_formal() {
        // formal = 2 ("please" twice), informal = 1 ("wassup")
        let texts = ["please help me", "please help me", "yo wassup"];
        assert_eq!(classify(&texts), FormalityLevel::SomewhatFormal);
    }

    #[test]
    fn formal_doubling_informal_is_very_formal() {
        let texts = ["please, thank you", "kind regards", "hey"];
        // formal = 3, informal = 1 -> 3 > 2
        assert_eq!(classify(&texts), FormalityLevel::VeryFormal);
    }

    #[test]
    fn informal_doubling_formal_is_very_casual() {
        let texts = ["Hey!!", "Hey!! what's up", "cool, gonna go"];
        // informal = 3 ("hey" x2, "gonna"), formal = 0
        assert_eq!(classify(&texts), FormalityLevel::VeryCasual);
    }

    #[test]
    fn balanced_counts_are_casual() {
        let texts = ["please", "hey"];
        assert_eq!(classify(&texts), FormalityLevel::Casual);
    }

    #[test]
    fn markers_match_case_insensitively() {
        let texts = ["PLEASE HELP", "Thank You so much"];
        assert_eq!(classify(&texts), FormalityLevel::VeryFormal);
    }
}
