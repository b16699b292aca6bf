//! Shared test helpers: a scriptable in-memory Provider.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use cod_studio::llm::{
    CompletionRequest, CompletionResponse, FinishReason, Provider, ProviderError, ToolCallPayload,
};

/// Provider that replays a scripted queue of results and records every
/// request it receives.
pub struct MockProvider {
    responses: Mutex<VecDeque<Result<CompletionResponse, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn new(responses: Vec<Result<CompletionResponse, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Succeed with the given texts, in order.
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(text_response(t))).collect())
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyResponse))
    }
}

#[allow(dead_code)]
pub fn text_response(text: &str) -> CompletionResponse {
    CompletionResponse {
        text: text.to_string(),
        tool_calls: Vec::new(),
        finish_reason: FinishReason::Stop,
    }
}

#[allow(dead_code)]
pub fn tool_call_response(id: &str, name: &str, arguments: &str) -> CompletionResponse {
    CompletionResponse {
        text: String::new(),
        tool_calls: vec![ToolCallPayload {
            id: id.to_string(),
            call_type: "function".to_string(),
            function: cod_studio::llm::FunctionPayload {
                name: name.to_string(),
                arguments: arguments.to_string(),
            },
        }],
        finish_reason: FinishReason::ToolCalls,
    }
}
