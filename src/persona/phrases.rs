// src/persona/phrases.rs

//! Phrase frequency mining: recurring n-word sequences in a participant's
//! messages, used to season generated replies with their actual wording.

use std::collections::HashMap;

/// Phrase window size in whitespace-delimited words.
pub const DEFAULT_PHRASE_WORDS: usize = 3;

/// How many repeated phrases make it into a profile.
pub const DEFAULT_TOP_PHRASES: usize = 5;

/// Top-k most frequent contiguous `phrase_words`-word sequences across
/// `texts`, case-insensitive. Phrases occurring only once are dropped.
/// Ranking is frequency descending, ties broken by first occurrence in
/// the corpus, so identical input always yields identical output.
pub fn mine_phrases(texts: &[&str], phrase_words: usize, top_k: usize) -> Vec<String> {
    if phrase_words == 0 || top_k == 0 {
        return Vec::new();
    }

    // phrase -> (count, first-seen sequence number)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut seen = 0usize;

    for text in texts {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();

        if words.len() < phrase_words {
            continue;
        }

        for window in words.windows(phrase_words) {
            let phrase = window.join(" ");
            let entry = counts.entry(phrase).or_insert((0, seen));
            entry.0 += 1;
            seen += 1;
        }
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count > 1)
        .collect();

    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(top_k);

    ranked.into_iter().map(|(phrase, _)| phrase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_corpus_yields_no_phrases() {
        assert!(mine_phrases(&[], DEFAULT_PHRASE_WORDS, DEFAULT_TOP_PHRASES).is_empty());
    }

    #[test]
    fn single_occurrences_are_dropped() {
        let texts = ["the quick brown fox", "a totally different message here"];
        assert!(mine_phrases(&texts, 3, 5).is_empty());
    }

    #[test]
    fn repeated_message_ranks_its_phrase_first() {
        let texts = ["good morning sunshine"; 5];
        let phrases = mine_phrases(&texts, 3, 5);
        assert_eq!(phrases, vec!["good morning sunshine".to_string()]);
    }

    #[test]
    fn mining_is_case_insensitive() {
        let texts = ["See You Soon", "see you soon"];
        let phrases = mine_phrases(&texts, 3, 5);
        assert_eq!(phrases, vec!["see you soon".to_string()]);
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        // "one two three" and "four five six" both occur twice; the first
        // one encountered must come out first.
        let texts = ["one two three", "four five six", "one two three", "four five six"];
        let phrases = mine_phrases(&texts, 3, 5);
        assert_eq!(
            phrases,
            vec!["one two three".to_string(), "four five six".to_string()]
        );
    }

    #[test]
    fn higher_frequency_outranks_earlier_occurrence() {
        let texts = ["a b c", "x y z", "x y z", "x y z", "a b c"];
        let phrases = mine_phrases(&texts, 3, 5);
        assert_eq!(phrases, vec!["x y z".to_string(), "a b c".to_string()]);
    }

    #[test]
    fn messages_shorter_than_window_are_skipped() {
        let texts = ["hi", "hi", "hi"];
        assert!(mine_phrases(&texts, 3, 5).is_empty());
    }
}
