//! Client-visible chat settings and their adaptive resolution.

use serde::{Deserialize, Serialize};

use crate::complexity::{ComplexityAssessment, VerificationDepth};
use crate::config::CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningMode {
    Standard,
    Adaptive,
}

/// Pass-through settings surface. Defaults mirror the studio UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_reasoning_mode")]
    pub reasoning_mode: ReasoningMode,
    #[serde(default = "default_verification_depth")]
    pub verification_depth: VerificationDepth,
    #[serde(default = "default_word_limit")]
    pub word_limit: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_reasoning_mode() -> ReasoningMode {
    ReasoningMode::Adaptive
}

fn default_verification_depth() -> VerificationDepth {
    VerificationDepth::Standard
}

fn default_word_limit() -> u32 {
    150
}

fn default_temperature() -> f32 {
    CONFIG.temperature
}

fn default_max_tokens() -> u32 {
    CONFIG.max_tokens
}

fn default_top_p() -> f32 {
    CONFIG.top_p
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reasoning_mode: default_reasoning_mode(),
            verification_depth: default_verification_depth(),
            word_limit: default_word_limit(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}

/// Settings actually applied to one request, after adaptive resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveSettings {
    pub word_limit: u32,
    pub verification_depth: VerificationDepth,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl ChatSettings {
    /// In adaptive mode the heuristic's recommendations override the word
    /// limit, verification depth, temperature and token budget. Standard
    /// mode passes the caller's values through untouched.
    pub fn resolve(&self, assessment: &ComplexityAssessment) -> EffectiveSettings {
        match self.reasoning_mode {
            ReasoningMode::Standard => EffectiveSettings {
                word_limit: self.word_limit,
                verification_depth: self.verification_depth,
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                top_p: self.top_p,
            },
            ReasoningMode::Adaptive => EffectiveSettings {
                word_limit: assessment.recommended_word_limit,
                verification_depth: assessment.recommended_verification,
                temperature: assessment.level.adaptive_temperature(),
                max_tokens: assessment.level.adaptive_max_tokens(),
                top_p: self.top_p,
            },
        }
    }

    /// Type/range validation for the pass-through surface.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(format!("top_p must be between 0.0 and 1.0, got {}", self.top_p));
        }
        if !(50..=300).contains(&self.word_limit) {
            return Err(format!(
                "word_limit must be between 50 and 300, got {}",
                self.word_limit
            ));
        }
        if !(1..=16_384).contains(&self.max_tokens) {
            return Err(format!(
                "max_tokens must be between 1 and 16384, got {}",
                self.max_tokens
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::assess;

    #[test]
    fn test_standard_mode_passes_settings_through() {
        let settings = ChatSettings {
            reasoning_mode: ReasoningMode::Standard,
            verification_depth: VerificationDepth::Deep,
            word_limit: 120,
            temperature: 0.7,
            max_tokens: 2000,
            top_p: 0.95,
        };

        let effective = settings.resolve(&assess("hello"));
        assert_eq!(effective.word_limit, 120);
        assert_eq!(effective.verification_depth, VerificationDepth::Deep);
        assert_eq!(effective.temperature, 0.7);
        assert_eq!(effective.max_tokens, 2000);
    }

    #[test]
    fn test_adaptive_mode_applies_band_overrides() {
        let settings = ChatSettings {
            reasoning_mode: ReasoningMode::Adaptive,
            ..ChatSettings::default()
        };

        // Basic-band input
        let effective = settings.resolve(&assess("What is 2+2?"));
        assert_eq!(effective.word_limit, 75);
        assert_eq!(effective.verification_depth, VerificationDepth::Basic);
        assert_eq!(effective.temperature, 0.3);
        assert_eq!(effective.max_tokens, 8_000);

        // Research-band input
        let research = assess(
            "Conduct a comprehensive, detailed, thorough, in-depth study: investigate \
             and examine the hypothesis, design the experiment, collect data and \
             analysis of results with proof.",
        );
        let effective = settings.resolve(&research);
        assert_eq!(effective.word_limit, 200);
        assert_eq!(effective.verification_depth, VerificationDepth::Research);
        assert_eq!(effective.temperature, 0.2);
        assert_eq!(effective.max_tokens, 12_000);
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: ChatSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.reasoning_mode, ReasoningMode::Adaptive);
        assert_eq!(settings.verification_depth, VerificationDepth::Standard);
        assert_eq!(settings.word_limit, 150);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut settings = ChatSettings::default();
        settings.temperature = 3.0;
        assert!(settings.validate().is_err());

        let mut settings = ChatSettings::default();
        settings.word_limit = 10;
        assert!(settings.validate().is_err());

        assert!(ChatSettings::default().validate().is_ok());
    }
}
