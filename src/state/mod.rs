// src/state/mod.rs
use tracing::{debug, info};

use crate::analysis::AnalysisResult;
use crate::chat::Transcript;
use crate::file::LogUpload;

pub mod chat_state;
pub mod effect;
pub mod request;

pub use chat_state::ChatState;
pub use effect::{Effect, Outcome};
pub use request::RequestState;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Analyze,
    Chat,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Analyze => "Log Analysis",
            Screen::Chat => "Chat with Agent",
        }
    }
}

// Core application state. Only commands and outcomes mutate it.
#[derive(Debug)]
pub struct AppState {
    pub current_screen: Screen,
    pub upload: Option<LogUpload>,
    pub analysis: RequestState<AnalysisResult>,
    pub transcript: Transcript,
    pub chat: ChatState,

    // Local failures (file reads etc.), shown in the error window
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Analyze,
            upload: None,
            analysis: RequestState::Idle,
            transcript: Transcript::new(),
            chat: ChatState::default(),
            error_message: None,
        }
    }

    /// Raw log of the live analysis, or empty when there is none.
    pub fn log_context(&self) -> String {
        self.analysis
            .value()
            .map(|analysis| analysis.raw_analysis.clone())
            .unwrap_or_default()
    }

    pub fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Analyzed(result) => {
                if !self.analysis.is_pending() {
                    debug!("Dropping analysis result with no request pending");
                    return;
                }
                self.analysis.finish(result);
            }
            Outcome::ChatReplied { seq, result } => {
                if !self.chat.is_outstanding(seq) {
                    info!(seq, "Discarding stale chat reply");
                    return;
                }
                match result {
                    Ok(reply) => {
                        self.transcript.push_agent(reply);
                        self.chat.request.finish(Ok(()));
                    }
                    // No rollback: the user message stays without a reply
                    Err(err) => self.chat.request.finish(Err(err)),
                }
            }
        }
    }
}
