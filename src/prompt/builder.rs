// src/prompt/builder.rs

//! Prompt composition: renders a style profile plus recent conversation
//! context into the single text prompt handed to the generation service.
//! Pure and deterministic — identical inputs produce an identical string,
//! so the output is golden-testable.

use crate::persona::StyleProfile;

/// Fixed system instruction for the generation call.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an AI trained to respond like a specific person based on their chat history.";

/// Rendered verbatim when the participant has no message history.
pub const NEW_CONVERSATION_FALLBACK: &str =
    "This is a new conversation; use a natural, friendly tone.";

/// One transcript line of recent context, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    pub sender: String,
    pub content: String,
}

/// Everything the composer needs. Borrowed so the caller keeps ownership
/// of the fetched corpus.
#[derive(Debug)]
pub struct PromptInputs<'a> {
    pub participant: &'a str,
    pub current_message: &'a str,
    pub recent_context: &'a [ContextLine],
    /// Raw example messages from the participant, most recent last.
    pub examples: &'a [&'a str],
    pub profile: &'a StyleProfile,
}

/// Build the full generation prompt: identity, style summary, real
/// example messages, recent transcript, the message to answer, and the
/// behavioral constraints.
pub fn compose_reply_prompt(inputs: &PromptInputs<'_>) -> String {
    let name = inputs.participant;
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are {name}. You are texting with someone who knows you well.\n\n"
    ));

    if inputs.profile.is_empty() {
        prompt.push_str(NEW_CONVERSATION_FALLBACK);
        prompt.push_str("\n\n");
    } else {
        push_style_summary(&mut prompt, name, inputs.profile);

        if !inputs.examples.is_empty() {
            prompt.push_str(&format!("Real messages {name} has sent:\n"));
            for example in inputs.examples {
                prompt.push_str(&format!("- {example}\n"));
            }
            prompt.push('\n');
        }
    }

    if !inputs.recent_context.is_empty() {
        prompt.push_str("Recent conversation:\n");
        for line in inputs.recent_context {
            prompt.push_str(&format!("{}: {}\n", line.sender, line.content));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "Now respond to this message as {name} would:\n\"{}\"\n\n",
        inputs.current_message
    ));

    prompt.push_str("Rules:\n");
    prompt.push_str(&format!("- Stay fully in character as {name}.\n"));
    prompt.push_str(&format!(
        "- Do not start your reply with \"{name}:\" or any other name prefix.\n"
    ));
    prompt.push_str("- Never break character or mention being an AI.\n");
    prompt.push_str(&format!(
        "- Match {name}'s usual punctuation, message length, and tone.\n"
    ));

    prompt
}

fn push_style_summary(prompt: &mut String, name: &str, profile: &StyleProfile) {
    prompt.push_str(&format!("How {name} writes:\n"));
    prompt.push_str(&format!(
        "- Average message length: {:.1} words\n",
        profile.average_words_per_message
    ));
    prompt.push_str(&format!(
        "- Exclamation marks: {} | questions: {} | ellipses: {}\n",
        profile.punctuation.exclamation, profile.punctuation.question, profile.punctuation.ellipsis
    ));
    prompt.push_str(&format!("- Emoji usage: {}\n", profile.emoji_usage));
    prompt.push_str(&format!("- Overall register: {}\n", profile.formality));

    if !profile.common_phrases.is_empty() {
        let quoted: Vec<String> = profile
            .common_phrases
            .iter()
            .map(|p| format!("\"{p}\""))
            .collect();
        prompt.push_str(&format!("- Often repeats phrases like {}\n", quoted.join(", ")));
    }

    prompt.push_str(&format!("- Emotional tone: {}\n", profile.traits.emotional_tone));
    prompt.push_str(&format!(
        "- Conversation style: {}\n",
        profile.traits.conversation_style
    ));
    prompt.push_str(&format!(
        "- Response patterns: {}\n",
        profile.traits.response_patterns
    ));
    prompt.push_str(&format!(
        "- Typical reactions: {}\n",
        profile.traits.typical_reactions
    ));
    prompt.push_str(&format!("- Quirks: {}\n", profile.traits.unique_quirks));
    prompt.push('\n');
}
