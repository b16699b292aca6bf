// src/config/mod.rs

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct StudioConfig {
    // ── Model Provider Configuration
    pub fireworks_base_url: String,
    pub model: String,
    pub fireworks_api_key: Option<String>,

    // ── Search Provider Configuration
    pub tavily_api_key: Option<String>,
    pub search_timeout: u64,

    // ── Sampling Defaults
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,

    // ── Chat Settings
    pub max_tool_rounds: usize,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Timeouts (in seconds)
    pub llm_timeout: u64,

    // ── Logging Configuration
    pub log_level: String,
}

/// Parses an environment variable, tolerating trailing comments and
/// whitespace, and falling back to the default on absence or parse failure.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

/// Reads an optional credential. Absence is a request-time configuration
/// error, never a startup crash.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl StudioConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            fireworks_base_url: env_var_or(
                "FIREWORKS_BASE_URL",
                "https://api.fireworks.ai/inference/v1".to_string(),
            ),
            model: env_var_or(
                "COD_MODEL",
                "accounts/fireworks/models/deepseek-v3-0324".to_string(),
            ),
            fireworks_api_key: optional_env("FIREWORKS_API_KEY"),
            tavily_api_key: optional_env("TAVILY_API_KEY"),
            search_timeout: env_var_or("COD_SEARCH_TIMEOUT", 10),
            temperature: env_var_or("COD_TEMPERATURE", 0.3),
            max_tokens: env_var_or("COD_MAX_TOKENS", 4000),
            top_p: env_var_or("COD_TOP_P", 0.9),
            max_tool_rounds: env_var_or("COD_MAX_TOOL_ROUNDS", 8),
            host: env_var_or("COD_HOST", "0.0.0.0".to_string()),
            port: env_var_or("COD_PORT", 3001),
            llm_timeout: env_var_or("COD_LLM_TIMEOUT", 60),
            log_level: env_var_or("COD_LOG_LEVEL", "info".to_string()),
        }
    }

    // --- Convenience Methods for Common Operations ---

    /// Full URL for the chat completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.fireworks_base_url.trim_end_matches('/')
        )
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the model credential is configured
    pub fn has_model_credential(&self) -> bool {
        self.fireworks_api_key.is_some()
    }

    /// Whether the search credential is configured
    pub fn has_search_credential(&self) -> bool {
        self.tavily_api_key.is_some()
    }

    /// Get timeout for model requests in milliseconds
    pub fn llm_timeout_ms(&self) -> u64 {
        self.llm_timeout * 1000
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<StudioConfig> = Lazy::new(StudioConfig::from_env);
