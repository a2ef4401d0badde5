// src/services/mod.rs

pub mod reply;

pub use reply::{ReplyError, ReplyService};
