//! Web search tool types
//!
//! Argument and result shapes for the Tavily search passthrough.

pub mod client;

pub use client::TavilyClient;

use serde::{Deserialize, Serialize};

/// Arguments for the web_search function - matches the declared schema
#[derive(Debug, Clone, Deserialize)]
pub struct WebSearchArgs {
    pub query: String,
    #[serde(default = "default_search_depth")]
    pub search_depth: SearchDepth,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default)]
    pub include_domains: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_domains: Option<Vec<String>>,
}

fn default_max_results() -> u32 {
    5
}

fn default_search_depth() -> SearchDepth {
    SearchDepth::Basic
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

impl SearchDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }
}

/// One formatted entry from the provider's results list.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f32,
}

/// Digest of one provider response.
#[derive(Debug, Clone)]
pub struct SearchDigest {
    /// Provider-supplied natural-language summary, when present
    pub answer: Option<String>,
    pub hits: Vec<SearchHit>,
}

/// Error types for web search. These never escape the tool: the executor
/// folds them into a labeled error result string.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search API credential is not configured")]
    MissingCredential,

    #[error("search API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
