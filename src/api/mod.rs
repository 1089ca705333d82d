// src/api/mod.rs
//! Client side of the agent service: the two endpoints the UI talks to,
//! the typed errors they can produce, and response decoding.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::AnalysisResult;
use crate::file::LogUpload;

pub mod http;
pub mod response;

pub use http::HttpAgentApi;

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const CHAT_PATH: &str = "/api/chat";

pub const NETWORK_ERROR: &str = "Network error";
pub const GENERIC_ERROR: &str = "An error occurred.";
pub const MALFORMED_ERROR: &str = "Unexpected response from server.";

/// Errors surfaced by a request. `Display` is the text shown to the user;
/// the carried detail strings are only for logs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// The request did not complete (connect failure, timeout, broken body).
    #[error("{}", NETWORK_ERROR)]
    Transport(String),
    /// The service answered with an `error` field.
    #[error("{0}")]
    Server(String),
    /// Non-2xx status without a usable `error` field.
    #[error("{}", GENERIC_ERROR)]
    Status(u16),
    /// The body was not the JSON shape we expect.
    #[error("{}", MALFORMED_ERROR)]
    Malformed(String),
}

impl RequestError {
    /// Wraps a server-supplied message, falling back to the generic text
    /// when the server sent an empty one.
    pub fn server(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            RequestError::Server(GENERIC_ERROR.to_string())
        } else {
            RequestError::Server(message)
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub log_context: String,
}

#[async_trait]
pub trait AgentApi: Send + Sync {
    /// Uploads a log file for analysis.
    async fn analyze(&self, upload: LogUpload) -> Result<AnalysisResult, RequestError>;

    /// Asks a question with the current log context; returns the reply text.
    async fn chat(&self, request: ChatRequest) -> Result<String, RequestError>;
}
