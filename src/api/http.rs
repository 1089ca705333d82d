// src/api/http.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::{info, warn};

use super::response::{decode_analyze, decode_chat};
use super::{AgentApi, ChatRequest, RequestError, ANALYZE_PATH, CHAT_PATH};
use crate::analysis::AnalysisResult;
use crate::config::ClientSettings;
use crate::file::LogUpload;

/// `AgentApi` over HTTP against the analysis and chat endpoints.
#[derive(Clone)]
pub struct HttpAgentApi {
    client: Client,
    analyze_url: String,
    chat_url: String,
}

impl HttpAgentApi {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            analyze_url: settings.endpoint(ANALYZE_PATH),
            chat_url: settings.endpoint(CHAT_PATH),
        })
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> RequestError {
    warn!(%url, timeout = err.is_timeout(), connect = err.is_connect(), "Request failed: {err}");
    RequestError::Transport(err.to_string())
}

#[async_trait]
impl AgentApi for HttpAgentApi {
    async fn analyze(&self, upload: LogUpload) -> Result<AnalysisResult, RequestError> {
        info!(file = %upload.file_name, bytes = upload.size(), "Uploading log for analysis");

        let part = multipart::Part::bytes(upload.content).file_name(upload.file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_error(&self.analyze_url, err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(&self.analyze_url, err))?;

        let result = decode_analyze(status, &body);
        match &result {
            Ok(analysis) => {
                info!(
                    risk_score = analysis.risk_score,
                    threat_level = %analysis.threat_level,
                    "Analysis complete"
                );
            }
            Err(err) => {
                warn!(%status, "Analysis failed: {err}");
            }
        }
        result
    }

    async fn chat(&self, request: ChatRequest) -> Result<String, RequestError> {
        info!(
            message_len = request.message.len(),
            context_len = request.log_context.len(),
            "Sending chat message"
        );

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| transport_error(&self.chat_url, err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(&self.chat_url, err))?;

        let reply = decode_chat(status, &body);
        if let Err(err) = &reply {
            warn!(%status, "Chat request failed: {err}");
        }
        reply
    }
}
