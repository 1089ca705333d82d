// src/chat/mod.rs
pub mod transcript;

pub use transcript::{ChatMessage, Sender, Transcript};
