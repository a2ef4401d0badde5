// src/persona/profile.rs

//! Style profile assembly: one structured, serializable summary of how a
//! participant writes. Recomputed from the corpus on every request — a
//! profile has no lifecycle of its own and is never cached.

use serde::{Deserialize, Serialize};

use super::formality::{self, FormalityLevel};
use super::patterns::{self, EmojiUsage, PunctuationProfile};
use super::phrases::{self, DEFAULT_PHRASE_WORDS, DEFAULT_TOP_PHRASES};
use super::traits::PersonalityTraits;

/// Tunable analysis parameters. Defaults match the documented constants;
/// the config layer may override them per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisParams {
    pub phrase_words: usize,
    pub phrase_top_k: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            phrase_words: DEFAULT_PHRASE_WORDS,
            phrase_top_k: DEFAULT_TOP_PHRASES,
        }
    }
}

/// Derived, read-only summary of a participant's communication style.
/// Deterministic for a given corpus and parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub message_count: usize,
    pub average_words_per_message: f64,
    pub punctuation: PunctuationProfile,
    pub common_phrases: Vec<String>,
    pub emoji_usage: EmojiUsage,
    pub formality: FormalityLevel,
    pub traits: PersonalityTraits,
}

impl StyleProfile {
    /// Analyze a participant's corpus. An empty corpus is a defined
    /// degenerate case, not an error: every field carries its neutral
    /// default and the prompt composer renders the new-conversation
    /// fallback instead of a style block.
    pub fn from_corpus(texts: &[&str], params: &AnalysisParams) -> Self {
        if texts.is_empty() {
            return Self::neutral();
        }

        Self {
            message_count: texts.len(),
            average_words_per_message: patterns::average_words(texts),
            punctuation: patterns::punctuation_profile(texts),
            common_phrases: phrases::mine_phrases(texts, params.phrase_words, params.phrase_top_k),
            emoji_usage: patterns::emoji_usage(texts),
            formality: formality::classify(texts),
            traits: PersonalityTraits::from_messages(texts),
        }
    }

    /// The profile of a participant with no history.
    pub fn neutral() -> Self {
        Self {
            message_count: 0,
            average_words_per_message: 0.0,
            punctuation: PunctuationProfile::neutral(),
            common_phrases: Vec::new(),
            emoji_usage: EmojiUsage::Rare,
            formality: FormalityLevel::Casual,
            traits: PersonalityTraits::neutral(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message_count == 0
    }
}
