//! Tool registry
//!
//! A fixed set of named, schema-validated functions the model may invoke
//! mid-conversation. Four are template fillers; `web_search` performs an
//! outbound Tavily call. The set is built at process start and advertised
//! to the model through the agent endpoint.

pub mod definitions;
pub mod executor;
pub mod memory;
pub mod web_search;

pub use definitions::tool_definitions;
pub use executor::ToolExecutor;
pub use memory::{InMemoryStore, MemoryCategory, MemoryItem, MemoryStore};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Record of one tool call made during a chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInvocation {
    pub tool_name: String,
    pub args: Value,
    pub result: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl ToolError {
    pub fn invalid(tool: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }
}
