//! Provider abstraction for remote text completion
//!
//! A narrow capability interface: request in, text/tool-calls out, explicit
//! error variant. Any OpenAI-compatible Chat Completions backend can sit
//! behind it; the production implementation targets Fireworks-hosted
//! DeepSeek.

mod fireworks;
mod types;

pub use fireworks::FireworksProvider;
pub use types::*;

use async_trait::async_trait;

/// Unified provider trait for LLM backends
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Create a non-streaming chat completion
    async fn create(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError>;
}
