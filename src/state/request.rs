// src/state/request.rs
use crate::api::RequestError;

/// Lifecycle of one kind of request. Loading, error and result are
/// derived from a single value so they can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn finish(&mut self, result: Result<T, RequestError>) {
        *self = match result {
            Ok(value) => RequestState::Succeeded(value),
            Err(err) => RequestState::Failed(err.to_string()),
        };
    }

    /// Drops a displayed error; any other state is left untouched.
    pub fn clear_error(&mut self) {
        if let RequestState::Failed(_) = self {
            *self = RequestState::Idle;
        }
    }
}
