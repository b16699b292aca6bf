//! Request/response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::complexity::{ComplexityLevel, VerificationDepth};
use crate::llm::MessageRole;
use crate::orchestrator::ChatSettings;
use crate::tools::ToolInvocation;

pub const API_VERSION: &str = "1";

/// One incoming role-tagged message.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Body for the tool-enabled chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatApiRequest {
    pub messages: Vec<IncomingMessage>,
    #[serde(default)]
    pub settings: Option<ChatSettings>,
}

#[derive(Debug, Serialize)]
pub struct ChatApiResponse {
    pub message: String,
    pub tool_invocations: Vec<ToolInvocation>,
}

/// Body for the two-stage endpoint: one user message plus settings.
#[derive(Debug, Deserialize)]
pub struct CodApiRequest {
    pub message: String,
    #[serde(default)]
    pub settings: Option<ChatSettings>,
}

/// Metadata attached to the final SSE event of a two-stage response.
#[derive(Debug, Serialize)]
pub struct CodReportMeta {
    pub id: String,
    pub level: ComplexityLevel,
    pub word_limit: u32,
    pub verification_depth: VerificationDepth,
}

#[derive(Debug, Deserialize)]
pub struct RenderApiRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RenderApiResponse {
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
    pub tools: usize,
    pub model_credential: bool,
    pub search_credential: bool,
}
