//! Groq HTTP client for the fact-checking oracle.
//!
//! The oracle is an OpenAI-compatible chat-completion endpoint. Every call is
//! bounded by the client timeout; callers treat any `OracleError` as a signal
//! to fall back to the local heuristic scorer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::OracleError;

/// Sampling temperature for verification calls. Low on purpose: verdicts
/// should be stable across runs.
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 512;

/// Remote text-classification oracle.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Send one system + user prompt pair, returning the raw reply text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, OracleError>;
}

/// Oracle backed by the Groq chat-completions API.
pub struct GroqClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl GroqClient {
    pub fn new(endpoint: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// The model this client queries.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl Oracle for GroqClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, OracleError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    OracleError::Unreachable(self.endpoint.clone())
                } else if e.is_timeout() {
                    OracleError::Timeout(self.timeout_secs)
                } else {
                    OracleError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Decode(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(OracleError::EmptyCompletion)
    }
}

/// Mock oracle for testing — replies with a fixed text or fails every call.
pub struct MockOracle {
    reply: Option<String>,
}

impl MockOracle {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
        }
    }

    /// An oracle whose endpoint is down: every call errors.
    pub fn unreachable() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, OracleError> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(OracleError::Unreachable("http://mock".into())),
        }
    }
}
