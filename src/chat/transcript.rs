// src/chat/transcript.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    /// Lines to render for this message. Agent replies come back as
    /// newline-separated bullet points, so they are split and blank lines
    /// dropped; user messages stay a single block.
    pub fn display_lines(&self) -> Vec<&str> {
        match self.sender {
            Sender::User => vec![self.text.as_str()],
            Sender::Agent => self
                .text
                .split('\n')
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.trim().is_empty())
                .collect(),
        }
    }
}

/// Append-only, ordered chat log. Messages are never edited or removed.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.into(),
        });
    }

    pub fn push_agent(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::Agent,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
