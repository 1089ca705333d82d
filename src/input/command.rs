// src/input/command.rs
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::api::ChatRequest;
use crate::file::read_log_file;
use crate::state::{AppState, Effect, RequestState, Screen};

/// An intent emitted by a view. Executing it transitions `AppState` and
/// may hand back network work for the app to run.
pub trait Command {
    fn execute(&self, state: &mut AppState) -> Result<Option<Effect>>;
}

pub struct SelectScreenCommand(pub Screen);
impl Command for SelectScreenCommand {
    fn execute(&self, state: &mut AppState) -> Result<Option<Effect>> {
        state.current_screen = self.0;
        Ok(None)
    }
}

pub struct NextTabCommand;
impl Command for NextTabCommand {
    fn execute(&self, state: &mut AppState) -> Result<Option<Effect>> {
        state.current_screen = match state.current_screen {
            Screen::Analyze => Screen::Chat,
            Screen::Chat => Screen::Analyze,
        };
        Ok(None)
    }
}

pub struct SelectFileCommand(pub PathBuf);
impl Command for SelectFileCommand {
    fn execute(&self, state: &mut AppState) -> Result<Option<Effect>> {
        let upload = read_log_file(&self.0)?;
        info!(file = %upload.file_name, bytes = upload.size(), "Log file selected");

        state.upload = Some(upload);
        state.analysis.clear_error();
        Ok(None)
    }
}

pub struct AnalyzeCommand;
impl Command for AnalyzeCommand {
    fn execute(&self, state: &mut AppState) -> Result<Option<Effect>> {
        let Some(upload) = state.upload.clone() else {
            debug!("Analyze requested without a selected file");
            return Ok(None);
        };
        if state.analysis.is_pending() {
            debug!("Analyze already in flight");
            return Ok(None);
        }

        // Replaces both a stale error and the previous result
        state.analysis = RequestState::Pending;
        Ok(Some(Effect::Analyze(upload)))
    }
}

pub struct SendChatCommand(pub String);
impl Command for SendChatCommand {
    fn execute(&self, state: &mut AppState) -> Result<Option<Effect>> {
        if self.0.trim().is_empty() {
            return Ok(None);
        }
        if state.chat.is_pending() {
            debug!("Chat send refused while a reply is outstanding");
            return Ok(None);
        }

        state.transcript.push_user(self.0.clone());
        let seq = state.chat.begin();

        Ok(Some(Effect::Chat {
            seq,
            request: ChatRequest {
                message: self.0.clone(),
                log_context: state.log_context(),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::sample_result;
    use crate::api::RequestError;
    use crate::chat::Sender;
    use crate::file::LogUpload;
    use crate::state::Outcome;
    use std::fs;
    use tempfile::TempDir;

    fn state_with_upload() -> AppState {
        let mut state = AppState::new();
        state.upload = Some(LogUpload::new("auth.log", b"sshd: Failed password".to_vec()));
        state
    }

    fn send(state: &mut AppState, text: &str) -> Option<u64> {
        match SendChatCommand(text.to_string()).execute(state).unwrap() {
            Some(Effect::Chat { seq, .. }) => Some(seq),
            Some(other) => panic!("unexpected effect {other:?}"),
            None => None,
        }
    }

    #[test]
    fn test_blank_messages_are_ignored() {
        let mut state = AppState::new();

        for text in ["", "   ", "\n\t "] {
            assert_eq!(send(&mut state, text), None);
        }
        assert!(state.transcript.is_empty());
        assert!(!state.chat.is_pending());
    }

    #[test]
    fn test_send_appends_user_message_optimistically() {
        let mut state = AppState::new();
        let effect = SendChatCommand("what is the risk?".into()).execute(&mut state).unwrap();

        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript.messages()[0].sender, Sender::User);
        assert!(state.chat.is_pending());
        assert_eq!(
            effect,
            Some(Effect::Chat {
                seq: 1,
                request: ChatRequest {
                    message: "what is the risk?".into(),
                    log_context: String::new(),
                },
            })
        );
    }

    #[test]
    fn test_log_context_is_latest_raw_analysis() {
        let mut state = state_with_upload();
        state.analysis = RequestState::Succeeded(sample_result());

        let effect = SendChatCommand("any threats?".into()).execute(&mut state).unwrap();
        match effect {
            Some(Effect::Chat { request, .. }) => {
                assert_eq!(request.log_context, sample_result().raw_analysis)
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_chat_error_never_appends_agent_message() {
        let mut state = AppState::new();
        let seq = send(&mut state, "is this malware?").unwrap();

        state.apply_outcome(Outcome::ChatReplied {
            seq,
            result: Err(RequestError::Server("Empty message".into())),
        });

        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.chat.error(), Some("Empty message"));
        assert!(!state.chat.is_pending());
    }

    #[test]
    fn test_transport_failure_keeps_user_message() {
        let mut state = AppState::new();
        let seq = send(&mut state, "firewall status?").unwrap();

        state.apply_outcome(Outcome::ChatReplied {
            seq,
            result: Err(RequestError::Transport("connection refused".into())),
        });

        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.chat.error(), Some("Network error"));
    }

    #[test]
    fn test_sequential_sends_keep_order() {
        let mut state = AppState::new();

        let seq_a = send(&mut state, "a").unwrap();
        state.apply_outcome(Outcome::ChatReplied { seq: seq_a, result: Ok("reply to a".into()) });
        let seq_b = send(&mut state, "b").unwrap();
        state.apply_outcome(Outcome::ChatReplied { seq: seq_b, result: Ok("reply to b".into()) });

        let log: Vec<(Sender, &str)> = state
            .transcript
            .messages()
            .iter()
            .map(|m| (m.sender, m.text.as_str()))
            .collect();
        assert_eq!(
            log,
            vec![
                (Sender::User, "a"),
                (Sender::Agent, "reply to a"),
                (Sender::User, "b"),
                (Sender::Agent, "reply to b"),
            ]
        );
    }

    #[test]
    fn test_send_refused_while_pending() {
        let mut state = AppState::new();
        send(&mut state, "first").unwrap();

        assert_eq!(send(&mut state, "second"), None);
        assert_eq!(state.transcript.len(), 1);
    }

    #[test]
    fn test_stale_chat_reply_is_discarded() {
        let mut state = AppState::new();
        let first = send(&mut state, "first").unwrap();
        state.apply_outcome(Outcome::ChatReplied {
            seq: first,
            result: Err(RequestError::Transport("timeout".into())),
        });
        let second = send(&mut state, "second").unwrap();

        // A duplicate delivery for the first request arrives late
        state.apply_outcome(Outcome::ChatReplied { seq: first, result: Ok("late".into()) });
        assert_eq!(state.transcript.len(), 2);
        assert!(state.chat.is_outstanding(second));

        state.apply_outcome(Outcome::ChatReplied { seq: second, result: Ok("on time".into()) });
        assert_eq!(state.transcript.messages()[2].text, "on time");
    }

    #[test]
    fn test_analyze_without_file_is_noop() {
        let mut state = AppState::new();
        let effect = AnalyzeCommand.execute(&mut state).unwrap();

        assert!(effect.is_none());
        assert_eq!(state.analysis, RequestState::Idle);
    }

    #[test]
    fn test_analyze_is_single_flight() {
        let mut state = state_with_upload();
        assert!(AnalyzeCommand.execute(&mut state).unwrap().is_some());
        assert!(AnalyzeCommand.execute(&mut state).unwrap().is_none());
        assert!(state.analysis.is_pending());
    }

    #[test]
    fn test_failed_analyze_reports_network_error() {
        let mut state = state_with_upload();
        AnalyzeCommand.execute(&mut state).unwrap();

        state.apply_outcome(Outcome::Analyzed(Err(RequestError::Transport("refused".into()))));

        assert!(state.analysis.value().is_none());
        assert_eq!(state.analysis.error(), Some("Network error"));
        assert!(!state.analysis.is_pending());
    }

    #[test]
    fn test_analyze_clears_previous_error_and_result() {
        let mut state = state_with_upload();
        state.analysis = RequestState::Failed("Empty log file".into());

        AnalyzeCommand.execute(&mut state).unwrap();
        assert_eq!(state.analysis.error(), None);
        assert!(state.analysis.is_pending());

        state.apply_outcome(Outcome::Analyzed(Ok(sample_result())));
        AnalyzeCommand.execute(&mut state).unwrap();
        assert!(state.analysis.value().is_none());
        assert_eq!(state.log_context(), "");
    }

    #[test]
    fn test_select_file_clears_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("syslog.txt");
        fs::write(&path, "kernel: segfault at 0").unwrap();

        let mut state = AppState::new();
        state.analysis = RequestState::Failed("Empty log file".into());

        SelectFileCommand(path).execute(&mut state).unwrap();
        assert_eq!(state.analysis, RequestState::Idle);
        assert_eq!(state.upload.as_ref().map(|u| u.file_name.as_str()), Some("syslog.txt"));
    }

    #[test]
    fn test_select_missing_file_keeps_previous_upload() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = state_with_upload();

        let result = SelectFileCommand(temp_dir.path().join("missing.log")).execute(&mut state);
        assert!(result.is_err());
        assert_eq!(state.upload.as_ref().map(|u| u.file_name.as_str()), Some("auth.log"));
    }

    #[test]
    fn test_tabs_keep_transcript() {
        let mut state = AppState::new();
        SelectScreenCommand(Screen::Chat).execute(&mut state).unwrap();
        send(&mut state, "hello").unwrap();

        NextTabCommand.execute(&mut state).unwrap();
        assert_eq!(state.current_screen, Screen::Analyze);
        NextTabCommand.execute(&mut state).unwrap();
        assert_eq!(state.current_screen, Screen::Chat);
        assert_eq!(state.transcript.len(), 1);
    }
}
