//! Fireworks provider implementation (Chat Completions API)
//!
//! Fireworks serves DeepSeek through the OpenAI-compatible Chat Completions
//! wire format, so the request/response types below follow that shape.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::CONFIG;

use super::{
    ChatMessage, CompletionRequest, CompletionResponse, FinishReason, Provider, ProviderError,
    ToolCallPayload,
};

pub struct FireworksProvider {
    client: HttpClient,
    api_key: String,
    url: String,
    model: String,
}

impl FireworksProvider {
    pub fn new(
        api_key: String,
        url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .user_agent("cod-studio/0.1")
            .build()?;

        Ok(Self {
            client,
            api_key,
            url,
            model,
        })
    }

    /// Build a provider from the process configuration. A missing credential
    /// is the configuration error the HTTP layer reports per request.
    pub fn from_config() -> Result<Self, ProviderError> {
        let api_key = CONFIG
            .fireworks_api_key
            .clone()
            .ok_or(ProviderError::MissingCredential)?;

        Self::new(
            api_key,
            CONFIG.chat_completions_url(),
            CONFIG.model.clone(),
            Duration::from_secs(CONFIG.llm_timeout),
        )
    }
}

#[async_trait]
impl Provider for FireworksProvider {
    fn name(&self) -> &'static str {
        "fireworks"
    }

    async fn create(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(request.tools.clone())
        };
        let tool_choice = tools.as_ref().map(|_| Value::String("auto".into()));

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: request.messages,
            tools,
            tool_choice,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
            stream: false,
        };

        debug!(model = %self.model, "dispatching completion request");

        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(failed to read body: {})", e));
            return Err(ProviderError::Api { status, body });
        }

        let result: ChatCompletionResponse = response.json().await?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse)?;

        let text = choice.message.content.unwrap_or_default();
        let tool_calls: Vec<ToolCallPayload> = choice.message.tool_calls.unwrap_or_default();

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("tool_calls") => FinishReason::ToolCalls,
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        Ok(CompletionResponse {
            text,
            tool_calls,
            finish_reason,
        })
    }
}

// ============================================================================
// Wire types (OpenAI-compatible Chat Completions format)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<Value>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCallPayload>>,
}
