// tests/persona_profile.rs
// Profile invariants over whole corpora, exercised through the public API.

use echoline::persona::{
    formality::FormalityLevel,
    patterns::EmojiUsage,
    phrases::mine_phrases,
    AnalysisParams, StyleProfile,
};

#[test]
fn average_words_is_never_negative() {
    let corpora: Vec<Vec<&str>> = vec![
        vec![],
        vec![""],
        vec!["one"],
        vec!["a few words here", "and a couple more"],
    ];
    for corpus in corpora {
        let profile = StyleProfile::from_corpus(&corpus, &AnalysisParams::default());
        assert!(profile.average_words_per_message >= 0.0);
    }
}

#[test]
fn empty_corpus_average_is_zero() {
    let profile = StyleProfile::from_corpus(&[], &AnalysisParams::default());
    assert_eq!(profile.average_words_per_message, 0.0);
}

#[test]
fn bucket_classifiers_always_return_one_label() {
    // Serialization proves each enum rendered exactly one variant.
    let corpora: Vec<Vec<&str>> = vec![
        vec![],
        vec!["!!! ??? ..."],
        vec!["\u{1F600}\u{1F600}\u{1F600}"],
        vec!["please, thank you, regards"],
        vec!["hey lol gonna wanna"],
    ];
    for corpus in corpora {
        let profile = StyleProfile::from_corpus(&corpus, &AnalysisParams::default());
        let rendered = serde_json::to_string(&profile).unwrap();
        assert!(!rendered.contains("null"));
        assert!(!rendered.contains("undefined"));
    }
}

#[test]
fn repeated_identical_messages_rank_their_phrase_first() {
    let corpus = vec!["see you at the usual spot"; 7];
    let phrases = mine_phrases(&corpus, 3, 5);
    assert_eq!(phrases[0], "see you at");
}

#[test]
fn profile_builder_is_idempotent() {
    let corpus = vec![
        "Hey!! how's it going",
        "lol that's great",
        "gonna be late... sorry!!",
        "wow no way",
    ];
    let params = AnalysisParams::default();
    let first = serde_json::to_vec(&StyleProfile::from_corpus(&corpus, &params)).unwrap();
    let second = serde_json::to_vec(&StyleProfile::from_corpus(&corpus, &params)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn formality_follows_the_documented_rule_order() {
    // formal = 2, informal = 1 -> majority without doubling
    let corpus = vec!["please help me", "please help me", "yo wassup"];
    let profile = StyleProfile::from_corpus(&corpus, &AnalysisParams::default());
    assert_eq!(profile.formality, FormalityLevel::SomewhatFormal);
}

#[test]
fn casual_corpus_classifies_very_casual_with_rare_emoji() {
    let corpus = vec!["Hey!!", "Hey!! what's up", "cool, gonna go"];
    let profile = StyleProfile::from_corpus(&corpus, &AnalysisParams::default());
    assert_eq!(profile.formality, FormalityLevel::VeryCasual);
    assert_eq!(profile.emoji_usage, EmojiUsage::Rare);
}
