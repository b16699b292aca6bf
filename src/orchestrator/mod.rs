//! Two-stage Chain of Draft orchestrator
//!
//! One logical request: assess the message, draft under a word cap (stage 1),
//! then verify and finalize (stage 2) with the draft embedded in the stage-2
//! instruction. The calls are strictly sequential and billed externally, so
//! a stage-1 failure aborts the whole orchestration before stage 2 is ever
//! issued; nothing is retried.

mod settings;

pub use settings::{ChatSettings, EffectiveSettings, ReasoningMode};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::complexity::{ComplexityLevel, VerificationDepth, assess};
use crate::llm::{ChatMessage, CompletionRequest, Provider, ProviderError};
use crate::prompt::{stage1_prompt, stage2_prompt};

/// Stage-2 runs slightly cooler than stage 1.
const STAGE2_TEMPERATURE_FACTOR: f32 = 0.9;
const MIN_TEMPERATURE: f32 = 0.1;

/// The concatenation of both stage outputs plus a short metadata header.
/// Transient: exists for one request/response cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedReport {
    pub id: String,
    pub level: ComplexityLevel,
    pub word_limit: u32,
    pub verification_depth: VerificationDepth,
    pub stage1: String,
    pub stage2: String,
    pub created_at: DateTime<Utc>,
}

impl CombinedReport {
    /// Metadata header prepended to the combined text.
    pub fn header(&self) -> String {
        format!(
            "**Enhanced CoD Reasoning** · complexity: {} · word limit: {} · verification: {}",
            self.level, self.word_limit, self.verification_depth
        )
    }

    /// Header + stage 1 + stage 2 as one report string.
    pub fn combined_text(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.header(), self.stage1, self.stage2)
    }
}

pub struct DraftOrchestrator {
    provider: Arc<dyn Provider>,
}

impl DraftOrchestrator {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Run the full two-stage flow for one user message.
    pub async fn run(
        &self,
        user_message: &str,
        settings: &ChatSettings,
    ) -> Result<CombinedReport, ProviderError> {
        let assessment = assess(user_message);
        let effective = settings.resolve(&assessment);

        info!(
            provider = self.provider.name(),
            level = %assessment.level,
            score = assessment.score,
            word_limit = effective.word_limit,
            "starting two-stage orchestration"
        );

        // Stage 1: draft under the word cap
        let stage1 = self
            .provider
            .create(CompletionRequest {
                messages: vec![
                    ChatMessage::system(stage1_prompt(effective.word_limit)),
                    ChatMessage::user(user_message),
                ],
                tools: Vec::new(),
                temperature: effective.temperature,
                max_tokens: effective.max_tokens,
                top_p: effective.top_p,
            })
            .await?;

        // Stage 2 is only reachable after stage 1 succeeded: the draft is
        // embedded in the instruction, and a failed stage 1 must not burn a
        // second billed call.
        let stage2_temperature =
            (effective.temperature * STAGE2_TEMPERATURE_FACTOR).max(MIN_TEMPERATURE);

        let stage2 = self
            .provider
            .create(CompletionRequest {
                messages: vec![
                    ChatMessage::system(stage2_prompt(
                        effective.verification_depth,
                        &stage1.text,
                    )),
                    ChatMessage::user(user_message),
                ],
                tools: Vec::new(),
                temperature: stage2_temperature,
                max_tokens: effective.max_tokens,
                top_p: effective.top_p,
            })
            .await?;

        info!(provider = self.provider.name(), "two-stage orchestration complete");

        Ok(CombinedReport {
            id: format!("cod_{}", Uuid::new_v4().simple()),
            level: assessment.level,
            word_limit: effective.word_limit,
            verification_depth: effective.verification_depth,
            stage1: stage1.text,
            stage2: stage2.text,
            created_at: Utc::now(),
        })
    }
}
