// src/api/response.rs
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use super::RequestError;
use crate::analysis::AnalysisResult;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatBody {
    response: Option<String>,
    error: Option<String>,
}

pub fn decode_analyze(status: StatusCode, body: &[u8]) -> Result<AnalysisResult, RequestError> {
    if status.is_success() {
        return match serde_json::from_slice::<AnalysisResult>(body) {
            Ok(result) => Ok(result),
            Err(parse_err) => match serde_json::from_slice::<ErrorBody>(body) {
                Ok(ErrorBody { error: Some(message), .. }) => Err(RequestError::server(message)),
                _ => {
                    warn!(%status, error = %parse_err, "Analysis response did not match the expected shape");
                    Err(RequestError::Malformed(parse_err.to_string()))
                }
            },
        };
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message), details }) => {
            if let Some(details) = details {
                debug!(%status, %details, "Analysis service error details");
            }
            Err(RequestError::server(message))
        }
        _ => Err(RequestError::Status(status.as_u16())),
    }
}

pub fn decode_chat(status: StatusCode, body: &[u8]) -> Result<String, RequestError> {
    let parsed: ChatBody = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(_) if !status.is_success() => return Err(RequestError::Status(status.as_u16())),
        Err(parse_err) => {
            warn!(%status, error = %parse_err, "Chat response was not valid JSON");
            return Err(RequestError::Malformed(parse_err.to_string()));
        }
    };

    // An error field always wins, even next to a response
    if let Some(message) = parsed.error {
        return Err(RequestError::server(message));
    }
    if !status.is_success() {
        return Err(RequestError::Status(status.as_u16()));
    }

    parsed
        .response
        .ok_or_else(|| RequestError::Malformed("chat response has no `response` field".to_string()))
}
