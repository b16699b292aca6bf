//! Prompt templates for the two-stage Chain of Draft flow
//!
//! The section markers below are load-bearing: the renderer pattern-matches
//! on them, so they must stay byte-identical between the templates and the
//! section dictionary.

pub mod builder;

pub use builder::{agent_system_prompt, stage1_prompt, stage2_prompt};

/// Marker prefix every section heading starts with, at the start of a line.
pub const SECTION_MARKER: &str = "#### ";

// Stage 1 section headings
pub const PROBLEM_ANALYSIS: &str = "PROBLEM ANALYSIS";
pub const CHAIN_OF_DRAFT_STEPS: &str = "CHAIN OF DRAFT STEPS";
pub const INITIAL_REFLECTION: &str = "INITIAL REFLECTION";
pub const DRAFT_SOLUTION: &str = "DRAFT SOLUTION";

// Stage 2 section headings
pub const STAGE2_VERIFICATION: &str = "STAGE 2 VERIFICATION";
pub const ERROR_DETECTION: &str = "ERROR DETECTION & CORRECTION";
pub const ALTERNATIVE_APPROACHES: &str = "ALTERNATIVE APPROACH ANALYSIS";
pub const CONFIDENCE_ASSESSMENT: &str = "CONFIDENCE ASSESSMENT";
pub const FINAL_ANSWER: &str = "FINAL COMPREHENSIVE ANSWER";
pub const REFLECTION_SUMMARY: &str = "REFLECTION SUMMARY";
