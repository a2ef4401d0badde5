// src/import/mod.rs

//! Transcript import: line-oriented extraction of `timestamp - sender:
//! content` records from an exported chat. Lines that do not match are
//! continuations of the previous message (multi-line texts) and are
//! appended to it; leading noise before the first match is dropped.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<timestamp> - <sender>: <content>` with a non-greedy sender so colons
/// inside the content survive.
static MESSAGE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?) - (.+?): (.+)$").expect("valid transcript regex"));

/// Timestamp layouts seen in the wild for this export format.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%Y, %I:%M %p",
    "%d/%m/%y, %H:%M",
    "%d/%m/%Y, %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// One parsed transcript message. `timestamp` is `None` when the raw
/// stamp did not match any known layout; the importer then synthesizes an
/// ordering-preserving stamp at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub sender: String,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim().trim_start_matches('[').trim_end_matches(']');
    for format in TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// Parse an exported transcript into ordered messages.
pub fn parse_transcript(text: &str) -> Vec<ParsedMessage> {
    let mut messages: Vec<ParsedMessage> = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = MESSAGE_LINE.captures(line) {
            messages.push(ParsedMessage {
                sender: caps[2].trim().to_string(),
                content: caps[3].to_string(),
                timestamp: parse_timestamp(&caps[1]),
            });
        } else if let Some(last) = messages.last_mut() {
            last.content.push('\n');
            last.content.push_str(line);
        }
        // Lines before the first match are export headers; skip them.
    }

    messages
}

/// Distinct senders in first-appearance order.
pub fn participants(messages: &[ParsedMessage]) -> Vec<String> {
    let mut seen = Vec::new();
    for message in messages {
        if !seen.contains(&message.sender) {
            seen.push(message.sender.clone());
        }
    }
    seen
}

/// Resolve timestamps for storage: parsed stamps are kept; missing ones
/// are synthesized from `base` plus the line index, preserving transcript
/// order without inventing history.
pub fn resolve_timestamps(
    messages: &[ParsedMessage],
    base: DateTime<Utc>,
) -> Vec<(String, String, DateTime<Utc>)> {
    messages
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let ts = m
                .timestamp
                .unwrap_or_else(|| base + Duration::seconds(i as i64));
            (m.sender.clone(), m.content.clone(), ts)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Messages and calls are end-to-end encrypted.
1/15/24, 9:03 AM - Alex: Hey!!
1/15/24, 9:04 AM - Jordan: morning
1/15/24, 9:05 AM - Alex: cool, gonna go
grab coffee first
1/15/24, 9:07 AM - Jordan: ok";

    #[test]
    fn parses_matching_lines() {
        let messages = parse_transcript(SAMPLE);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].sender, "Alex");
        assert_eq!(messages[0].content, "Hey!!");
        assert!(messages[0].timestamp.is_some());
    }

    #[test]
    fn continuation_lines_append_to_previous_message() {
        let messages = parse_transcript(SAMPLE);
        assert_eq!(messages[2].content, "cool, gonna go\ngrab coffee first");
    }

    #[test]
    fn header_lines_before_first_match_are_dropped() {
        let messages = parse_transcript(SAMPLE);
        assert!(messages.iter().all(|m| !m.content.contains("encrypted")));
    }

    #[test]
    fn participants_in_first_appearance_order() {
        let messages = parse_transcript(SAMPLE);
        assert_eq!(participants(&messages), vec!["Alex", "Jordan"]);
    }

    #[test]
    fn colons_in_content_survive() {
        let messages = parse_transcript("1/15/24, 9:03 AM - Alex: note: bring the charger");
        assert_eq!(messages[0].sender, "Alex");
        assert_eq!(messages[0].content, "note: bring the charger");
    }

    #[test]
    fn empty_transcript_parses_to_nothing() {
        assert!(parse_transcript("").is_empty());
        assert!(parse_transcript("\n\n").is_empty());
    }

    #[test]
    fn unparseable_stamps_get_synthesized_in_order() {
        let messages = parse_transcript("sometime - Alex: one\nlater - Alex: two");
        assert!(messages.iter().all(|m| m.timestamp.is_none()));

        let base = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let resolved = resolve_timestamps(&messages, base);
        assert!(resolved[0].2 < resolved[1].2);
    }
}
