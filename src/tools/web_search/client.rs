//! Tavily search client - optimized for AI agents

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::{SearchDigest, SearchError, SearchHit, WebSearchArgs};

const TAVILY_API_URL: &str = "https://api.tavily.com/search";

pub struct TavilyClient {
    http_client: Client,
    api_key: Option<String>,
}

impl TavilyClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, SearchError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent("cod-studio/0.1")
            .build()?;

        Ok(Self {
            http_client,
            api_key,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Execute one search. A missing key or a non-success status is a hard
    /// failure for this call only.
    pub async fn search(&self, args: &WebSearchArgs) -> Result<SearchDigest, SearchError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SearchError::MissingCredential)?;

        let request = TavilySearchRequest {
            api_key: api_key.clone(),
            query: args.query.clone(),
            search_depth: args.search_depth.as_str().to_string(),
            max_results: args.max_results,
            include_answer: true,
            include_images: false,
            include_raw_content: false,
            include_domains: args.include_domains.clone(),
            exclude_domains: args.exclude_domains.clone(),
        };

        info!(query = %args.query, depth = args.search_depth.as_str(), "executing web search");

        let response = self
            .http_client
            .post(TAVILY_API_URL)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Api { status, body });
        }

        let tavily_response: TavilySearchResponse = response.json().await?;

        let hits: Vec<SearchHit> = tavily_response
            .results
            .into_iter()
            .map(|r| SearchHit {
                title: r.title,
                url: r.url,
                content: r.content,
                score: r.score,
            })
            .collect();

        Ok(SearchDigest {
            answer: tavily_response.answer.filter(|a| !a.is_empty()),
            hits,
        })
    }
}

// ============================================================================
// Tavily wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct TavilySearchRequest {
    api_key: String,
    query: String,
    search_depth: String,
    max_results: u32,
    include_answer: bool,
    include_images: bool,
    include_raw_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_domains: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    title: String,
    url: String,
    content: String,
    #[serde(default)]
    score: f32,
}
