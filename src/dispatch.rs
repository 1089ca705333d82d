// src/dispatch.rs
use eframe::egui;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

use crate::api::AgentApi;
use crate::state::{Effect, Outcome};

/// Runs effects on the async runtime and hands their outcomes back to the
/// UI thread, which drains them once per frame.
pub struct Dispatcher {
    handle: Handle,
    api: Arc<dyn AgentApi>,
    sender: UnboundedSender<Outcome>,
    receiver: UnboundedReceiver<Outcome>,
    repaint: Option<egui::Context>,
}

impl Dispatcher {
    pub fn new(handle: Handle, api: Arc<dyn AgentApi>) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            handle,
            api,
            sender,
            receiver,
            repaint: None,
        }
    }

    /// Wake the UI whenever an outcome arrives.
    pub fn set_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn dispatch(&self, effect: Effect) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        self.handle.spawn(async move {
            let outcome = match effect {
                Effect::Analyze(upload) => Outcome::Analyzed(api.analyze(upload).await),
                Effect::Chat { seq, request } => {
                    info!(seq, "Chat request dispatched");
                    Outcome::ChatReplied {
                        seq,
                        result: api.chat(request).await,
                    }
                }
            };

            if sender.send(outcome).is_err() {
                error!("UI is gone, dropping request outcome");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    pub fn drain(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.receiver.try_recv() {
            outcomes.push(outcome);
        }
        outcomes
    }

    #[cfg(test)]
    async fn next_outcome(&mut self) -> Option<Outcome> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::sample_result;
    use crate::analysis::AnalysisResult;
    use crate::api::{ChatRequest, RequestError};
    use crate::file::LogUpload;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        chats: Mutex<Vec<ChatRequest>>,
    }

    #[async_trait]
    impl AgentApi for FakeApi {
        async fn analyze(&self, upload: LogUpload) -> Result<AnalysisResult, RequestError> {
            if upload.content.is_empty() {
                return Err(RequestError::server("Empty log file"));
            }
            Ok(sample_result())
        }

        async fn chat(&self, request: ChatRequest) -> Result<String, RequestError> {
            let reply = format!("reply to {}", request.message);
            self.chats.lock().unwrap().push(request);
            Ok(reply)
        }
    }

    #[tokio::test]
    async fn test_analyze_outcome_comes_back() {
        let mut dispatcher = Dispatcher::new(Handle::current(), Arc::new(FakeApi::default()));

        dispatcher.dispatch(Effect::Analyze(LogUpload::new("auth.log", b"line".to_vec())));
        let outcome = dispatcher.next_outcome().await.unwrap();
        assert_eq!(outcome, Outcome::Analyzed(Ok(sample_result())));

        dispatcher.dispatch(Effect::Analyze(LogUpload::new("empty.log", Vec::new())));
        let outcome = dispatcher.next_outcome().await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Analyzed(Err(RequestError::Server("Empty log file".into())))
        );
    }

    #[tokio::test]
    async fn test_chat_outcome_keeps_sequence_number() {
        let api = Arc::new(FakeApi::default());
        let mut dispatcher = Dispatcher::new(Handle::current(), api.clone());

        dispatcher.dispatch(Effect::Chat {
            seq: 4,
            request: ChatRequest {
                message: "ports?".into(),
                log_context: "raw".into(),
            },
        });

        let outcome = dispatcher.next_outcome().await.unwrap();
        assert_eq!(
            outcome,
            Outcome::ChatReplied {
                seq: 4,
                result: Ok("reply to ports?".into()),
            }
        );
        assert_eq!(api.chats.lock().unwrap()[0].log_context, "raw");
        assert!(dispatcher.drain().is_empty());
    }
}
