// src/persona/patterns.rs

//! Lexical pattern analysis: aggregate statistics over a participant's
//! message set. Counts are bucketed into qualitative labels so the prompt
//! composer never has to interpret raw numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A punctuation count above this rate (occurrences per message) reads as
/// "frequent".
pub const PUNCT_FREQUENT_PER_MESSAGE: f64 = 0.5;

/// Between this rate and [`PUNCT_FREQUENT_PER_MESSAGE`] reads as
/// "occasional"; at or below it, "rare".
pub const PUNCT_OCCASIONAL_PER_MESSAGE: f64 = 0.1;

/// Emoji per message below this is "rare".
pub const EMOJI_RARE_MAX: f64 = 0.2;

/// Emoji per message above this is "frequent"; in between, "moderate".
pub const EMOJI_FREQUENT_MIN: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationFrequency {
    Rare,
    Occasional,
    Frequent,
}

impl fmt::Display for PunctuationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PunctuationFrequency::Rare => "rare",
            PunctuationFrequency::Occasional => "occasional",
            PunctuationFrequency::Frequent => "frequent",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiUsage {
    Rare,
    Moderate,
    Frequent,
}

impl fmt::Display for EmojiUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmojiUsage::Rare => "rare",
            EmojiUsage::Moderate => "moderate",
            EmojiUsage::Frequent => "frequent",
        };
        write!(f, "{label}")
    }
}

/// Qualitative rates for the three punctuation habits worth imitating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationProfile {
    pub exclamation: PunctuationFrequency,
    pub question: PunctuationFrequency,
    pub ellipsis: PunctuationFrequency,
}

impl PunctuationProfile {
    pub fn neutral() -> Self {
        Self {
            exclamation: PunctuationFrequency::Rare,
            question: PunctuationFrequency::Rare,
            ellipsis: PunctuationFrequency::Rare,
        }
    }
}

/// Mean whitespace-delimited word count per message. 0.0 for an empty
/// corpus; never divides by zero.
pub fn average_words(texts: &[&str]) -> f64 {
    if texts.is_empty() {
        return 0.0;
    }
    let total: usize = texts.iter().map(|t| t.split_whitespace().count()).sum();
    total as f64 / texts.len() as f64
}

/// Mean character count per message. 0.0 for an empty corpus.
pub fn average_chars(texts: &[&str]) -> f64 {
    if texts.is_empty() {
        return 0.0;
    }
    let total: usize = texts.iter().map(|t| t.chars().count()).sum();
    total as f64 / texts.len() as f64
}

/// Non-overlapping occurrences of `pattern` across all messages.
pub fn count_occurrences(texts: &[&str], pattern: &str) -> usize {
    texts.iter().map(|t| t.matches(pattern).count()).sum()
}

/// Bucket an aggregate count against the size of the corpus.
pub fn bucket_punctuation(count: usize, message_count: usize) -> PunctuationFrequency {
    if message_count == 0 {
        return PunctuationFrequency::Rare;
    }
    let rate = count as f64 / message_count as f64;
    if rate > PUNCT_FREQUENT_PER_MESSAGE {
        PunctuationFrequency::Frequent
    } else if rate > PUNCT_OCCASIONAL_PER_MESSAGE {
        PunctuationFrequency::Occasional
    } else {
        PunctuationFrequency::Rare
    }
}

/// Punctuation profile over the corpus. `!` and `?` are counted per
/// character, `...` per non-overlapping occurrence.
pub fn punctuation_profile(texts: &[&str]) -> PunctuationProfile {
    let n = texts.len();
    PunctuationProfile {
        exclamation: bucket_punctuation(count_occurrences(texts, "!"), n),
        question: bucket_punctuation(count_occurrences(texts, "?"), n),
        ellipsis: bucket_punctuation(count_occurrences(texts, "..."), n),
    }
}

/// Check whether a character falls into the common emoji blocks.
pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    (0x1F600..=0x1F64F).contains(&cp) // Emoticons
        || (0x1F300..=0x1F5FF).contains(&cp) // Misc symbols and pictographs
        || (0x1F680..=0x1F6FF).contains(&cp) // Transport and map
        || (0x1F900..=0x1F9FF).contains(&cp) // Supplemental symbols
        || (0x2600..=0x26FF).contains(&cp) // Misc symbols
        || (0x2700..=0x27BF).contains(&cp) // Dingbats
}

/// Emoji code points per message, bucketed by the `EMOJI_*` thresholds.
pub fn emoji_usage(texts: &[&str]) -> EmojiUsage {
    if texts.is_empty() {
        return EmojiUsage::Rare;
    }
    let count: usize = texts
        .iter()
        .map(|t| t.chars().filter(|c| is_emoji(*c)).count())
        .sum();
    let density = count as f64 / texts.len() as f64;
    if density > EMOJI_FREQUENT_MIN {
        EmojiUsage::Frequent
    } else if density >= EMOJI_RARE_MAX {
        EmojiUsage::Moderate
    } else {
        EmojiUsage::Rare
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_words_handles_empty_corpus() {
        assert_eq!(average_words(&[]), 0.0);
    }

    #[test]
    fn average_words_counts_whitespace_tokens() {
        let texts = ["one two three", "four five"];
        assert!((average_words(&texts) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn punctuation_buckets_follow_thresholds() {
        // 10 messages: 6 '!' -> frequent, 2 '?' -> occasional, 0 '...' -> rare
        assert_eq!(bucket_punctuation(6, 10), PunctuationFrequency::Frequent);
        assert_eq!(bucket_punctuation(2, 10), PunctuationFrequency::Occasional);
        assert_eq!(bucket_punctuation(0, 10), PunctuationFrequency::Rare);
        // Boundary: exactly corpus/2 is not "frequent"
        assert_eq!(bucket_punctuation(5, 10), PunctuationFrequency::Occasional);
        // Boundary: exactly corpus/10 is not "occasional"
        assert_eq!(bucket_punctuation(1, 10), PunctuationFrequency::Rare);
    }

    #[test]
    fn empty_corpus_buckets_are_rare() {
        assert_eq!(bucket_punctuation(0, 0), PunctuationFrequency::Rare);
        assert_eq!(emoji_usage(&[]), EmojiUsage::Rare);
    }

    #[test]
    fn ellipsis_counted_as_whole_sequences() {
        let texts = ["well... maybe... ok"];
        assert_eq!(count_occurrences(&texts, "..."), 2);
    }

    #[test]
    fn emoji_density_buckets() {
        // One emoji across one message -> density 1.0 -> frequent
        let frequent = ["hi \u{1F600}"];
        assert_eq!(emoji_usage(&frequent), EmojiUsage::Frequent);

        // One emoji across five messages -> density 0.2 -> moderate (inclusive lower bound)
        let moderate = ["\u{1F389} nice", "ok", "ok", "ok", "ok"];
        assert_eq!(emoji_usage(&moderate), EmojiUsage::Moderate);

        // One emoji across ten messages -> density 0.1 -> rare
        let rare = ["\u{2764} hey", "a", "b", "c", "d", "e", "f", "g", "h", "i"];
        assert_eq!(emoji_usage(&rare), EmojiUsage::Rare);
    }

    #[test]
    fn plain_text_has_no_emoji() {
        assert!(!is_emoji('a'));
        assert!(!is_emoji('!'));
        assert_eq!(emoji_usage(&["hello world", "no emoji here"]), EmojiUsage::Rare);
    }
}
