//! Message complexity heuristic
//!
//! Scores free text against fixed keyword categories and length/punctuation
//! features, then maps the score to one of four bands. Each band carries a
//! fixed per-step word limit and verification depth, plus the sampling
//! overrides used in adaptive mode. Pure and total: every string input
//! produces an assessment, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete complexity band, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Basic,
    Standard,
    Advanced,
    Research,
}

/// Verification depth recommended for stage 2, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationDepth {
    Basic,
    Standard,
    Deep,
    Research,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplexityLevel::Basic => "basic",
            ComplexityLevel::Standard => "standard",
            ComplexityLevel::Advanced => "advanced",
            ComplexityLevel::Research => "research",
        };
        f.write_str(s)
    }
}

impl fmt::Display for VerificationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerificationDepth::Basic => "basic",
            VerificationDepth::Standard => "standard",
            VerificationDepth::Deep => "deep",
            VerificationDepth::Research => "research",
        };
        f.write_str(s)
    }
}

impl ComplexityLevel {
    /// Temperature applied when adaptive mode is active.
    pub fn adaptive_temperature(self) -> f32 {
        match self {
            ComplexityLevel::Research => 0.2,
            ComplexityLevel::Advanced => 0.25,
            _ => 0.3,
        }
    }

    /// Max-token budget applied when adaptive mode is active.
    pub fn adaptive_max_tokens(self) -> u32 {
        match self {
            ComplexityLevel::Research => 12_000,
            ComplexityLevel::Advanced => 10_000,
            _ => 8_000,
        }
    }
}

/// Which keyword categories matched at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryFlags {
    pub mathematical: bool,
    pub scientific: bool,
    pub logical: bool,
    pub technical: bool,
    pub research: bool,
    pub philosophical: bool,
    pub economic: bool,
    pub multistep: bool,
}

/// Result of scoring one input message.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityAssessment {
    pub flags: CategoryFlags,
    pub word_count: usize,
    pub sentence_count: usize,
    pub question_count: usize,
    pub score: u32,
    pub level: ComplexityLevel,
    pub recommended_word_limit: u32,
    pub recommended_verification: VerificationDepth,
}

// Keyword tables. The lists and the non-uniform weights are behavioral
// constants: academic-leaning categories weigh more than structural ones.
const MATHEMATICAL: &[&str] = &[
    "equation", "formula", "calculate", "solve", "proof", "theorem", "derivative", "integral",
];
const SCIENTIFIC: &[&str] = &[
    "hypothesis", "experiment", "research", "study", "analysis", "method", "data", "results",
];
const LOGICAL: &[&str] = &[
    "if", "then", "because", "therefore", "logic", "reason", "argument", "premise", "conclusion",
];
const TECHNICAL: &[&str] = &[
    "code", "algorithm", "system", "architecture", "design", "implementation", "framework",
];
const RESEARCH: &[&str] = &[
    "investigate", "explore", "examine", "comprehensive", "detailed", "thorough", "in-depth",
];
const PHILOSOPHICAL: &[&str] = &[
    "ethics", "moral", "philosophy", "meaning", "purpose", "existence", "consciousness",
];
const ECONOMIC: &[&str] = &[
    "market", "economy", "financial", "cost", "benefit", "trade", "investment", "profit",
];
const MULTISTEP: &[&str] = &[
    "step by step", "first", "second", "then", "next", "finally", "process", "procedure",
];

const WEIGHT_MATHEMATICAL: u32 = 2;
const WEIGHT_SCIENTIFIC: u32 = 3;
const WEIGHT_LOGICAL: u32 = 1;
const WEIGHT_TECHNICAL: u32 = 1;
const WEIGHT_RESEARCH: u32 = 3;
const WEIGHT_PHILOSOPHICAL: u32 = 2;
const WEIGHT_ECONOMIC: u32 = 2;
const WEIGHT_MULTISTEP: u32 = 1;

// Length/punctuation bonuses
const LONG_TEXT_WORDS: usize = 200;
const VERY_LONG_TEXT_WORDS: usize = 500;
const MANY_SENTENCES: usize = 10;

// Score cutoffs for the four bands, with their fixed recommendations
const RESEARCH_CUTOFF: u32 = 15;
const ADVANCED_CUTOFF: u32 = 10;
const STANDARD_CUTOFF: u32 = 5;

static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence split pattern is valid"));

fn matched_keywords(lower: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|kw| lower.contains(*kw)).count() as u32
}

fn band(score: u32) -> (ComplexityLevel, u32, VerificationDepth) {
    if score >= RESEARCH_CUTOFF {
        (ComplexityLevel::Research, 200, VerificationDepth::Research)
    } else if score >= ADVANCED_CUTOFF {
        (ComplexityLevel::Advanced, 150, VerificationDepth::Deep)
    } else if score >= STANDARD_CUTOFF {
        (ComplexityLevel::Standard, 100, VerificationDepth::Standard)
    } else {
        (ComplexityLevel::Basic, 75, VerificationDepth::Basic)
    }
}

/// Score a message and derive its complexity band.
pub fn assess(text: &str) -> ComplexityAssessment {
    if text.trim().is_empty() {
        let (level, word_limit, verification) = band(0);
        return ComplexityAssessment {
            flags: CategoryFlags::default(),
            word_count: 0,
            sentence_count: 0,
            question_count: 0,
            score: 0,
            level,
            recommended_word_limit: word_limit,
            recommended_verification: verification,
        };
    }

    let lower = text.to_lowercase();
    let mut score = 0u32;

    let categories: [(&[&str], u32); 8] = [
        (MATHEMATICAL, WEIGHT_MATHEMATICAL),
        (SCIENTIFIC, WEIGHT_SCIENTIFIC),
        (LOGICAL, WEIGHT_LOGICAL),
        (TECHNICAL, WEIGHT_TECHNICAL),
        (RESEARCH, WEIGHT_RESEARCH),
        (PHILOSOPHICAL, WEIGHT_PHILOSOPHICAL),
        (ECONOMIC, WEIGHT_ECONOMIC),
        (MULTISTEP, WEIGHT_MULTISTEP),
    ];

    let mut matched = [0u32; 8];
    for (i, (keywords, weight)) in categories.iter().enumerate() {
        matched[i] = matched_keywords(&lower, keywords);
        score += matched[i] * weight;
    }

    let flags = CategoryFlags {
        mathematical: matched[0] > 0,
        scientific: matched[1] > 0,
        logical: matched[2] > 0,
        technical: matched[3] > 0,
        research: matched[4] > 0,
        philosophical: matched[5] > 0,
        economic: matched[6] > 0,
        multistep: matched[7] > 0,
    };

    let word_count = text.split(' ').count();
    let sentence_count = SENTENCE_SPLIT.split(text).count();
    let question_count = text.chars().filter(|c| *c == '?').count();

    if word_count > LONG_TEXT_WORDS {
        score += 2;
    }
    if word_count > VERY_LONG_TEXT_WORDS {
        score += 3;
    }
    if sentence_count > MANY_SENTENCES {
        score += 2;
    }
    if question_count > 1 {
        score += 1;
    }

    let (level, word_limit, verification) = band(score);

    ComplexityAssessment {
        flags,
        word_count,
        sentence_count,
        question_count,
        score,
        level,
        recommended_word_limit: word_limit,
        recommended_verification: verification,
    }
}
