// src/prompt/mod.rs

pub mod builder;

pub use builder::{
    compose_reply_prompt, ContextLine, PromptInputs, NEW_CONVERSATION_FALLBACK,
    SYSTEM_INSTRUCTION,
};
