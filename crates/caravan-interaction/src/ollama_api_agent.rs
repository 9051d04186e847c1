//! OllamaApiAgent - Direct REST API implementation for a local Ollama server.
//!
//! This agent calls Ollama's chat endpoint directly, with no streaming.
//! Configuration comes from environment variables with local defaults.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

use caravan_core::agent::ChatBackend;
use caravan_core::error::{CaravanError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.2:3b";
const CHAT_PATH: &str = "/api/chat";

/// Chat backend that talks to a local Ollama server over HTTP.
#[derive(Clone)]
pub struct OllamaApiAgent {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaApiAgent {
    /// Creates a new agent for the given server address and model.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            model: model.into(),
        }
    }

    /// Builds the agent from environment variables.
    ///
    /// `OLLAMA_BASE_URL` defaults to `http://localhost:11434` and
    /// `OLLAMA_MODEL_NAME` to `llama3.2:3b`.
    pub fn from_env() -> Self {
        let base_url = env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("OLLAMA_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Self::new(base_url, model)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The server address this agent talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The model requested for completions.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_request(&self, body: &ChatRequest) -> Result<String> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        debug!(url = %url, model = %self.model, "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                CaravanError::backend(None, format!("Ollama chat request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Ollama error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let text = response.text().await.map_err(|err| {
            CaravanError::backend(None, format!("Failed to read Ollama response: {err}"))
        })?;
        let parsed: ChatResponse = serde_json::from_str(&text)?;

        extract_message_content(parsed)
    }
}

#[async_trait]
impl ChatBackend for OllamaApiAgent {
    /// Checks that the Ollama server answers at its base URL.
    ///
    /// Any connection failure or non-success status is an `Unreachable`
    /// error; callers treat that as fatal before any agent work starts.
    async fn probe(&self) -> Result<()> {
        debug!(url = %self.base_url, "probing Ollama server");

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|err| CaravanError::unreachable(&self.base_url, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CaravanError::unreachable(
                &self.base_url,
                format!("server responded with status {status}"),
            ));
        }
        Ok(())
    }

    async fn chat_complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        self.send_request(&request).await
    }
}

impl Default for OllamaApiAgent {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn extract_message_content(response: ChatResponse) -> Result<String> {
    response
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| {
            CaravanError::backend(None, "Ollama API returned no content in the response")
        })
}

fn map_http_error(status: StatusCode, body: String) -> CaravanError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error)
        .unwrap_or_else(|_| body.clone());

    CaravanError::backend(Some(status.as_u16()), message)
}
