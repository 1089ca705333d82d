// src/state/chat_state.rs
use super::request::RequestState;

/// Chat request lifecycle. Sends are single-flight; `last_seq` numbers
/// every request so a late reply to anything but the outstanding one is
/// recognised and dropped.
#[derive(Debug, Default)]
pub struct ChatState {
    pub request: RequestState<()>,
    last_seq: u64,
}

impl ChatState {
    pub fn is_pending(&self) -> bool {
        self.request.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    /// Marks a new request as outstanding and returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.last_seq += 1;
        self.request = RequestState::Pending;
        self.last_seq
    }

    /// True when `seq` is the request we are still waiting on.
    pub fn is_outstanding(&self, seq: u64) -> bool {
        self.request.is_pending() && seq == self.last_seq
    }
}
