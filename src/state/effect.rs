// src/state/effect.rs
use crate::analysis::AnalysisResult;
use crate::api::{ChatRequest, RequestError};
use crate::file::LogUpload;

/// Network work a command asks the app to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Analyze(LogUpload),
    Chat { seq: u64, request: ChatRequest },
}

/// Result of an `Effect`, fed back into `AppState` on the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Analyzed(Result<AnalysisResult, RequestError>),
    ChatReplied {
        seq: u64,
        result: Result<String, RequestError>,
    },
}
