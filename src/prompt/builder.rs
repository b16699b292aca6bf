//! Builds the stage instruction strings sent as system prompts.

use crate::complexity::VerificationDepth;

use super::{
    ALTERNATIVE_APPROACHES, CHAIN_OF_DRAFT_STEPS, CONFIDENCE_ASSESSMENT, DRAFT_SOLUTION,
    ERROR_DETECTION, FINAL_ANSWER, INITIAL_REFLECTION, PROBLEM_ANALYSIS, REFLECTION_SUMMARY,
    SECTION_MARKER, STAGE2_VERIFICATION,
};

/// Stage 1: draft the reasoning under a per-step word cap.
///
/// The literal word limit appears wherever a step cap is stated; the section
/// markers give the renderer its anchors.
pub fn stage1_prompt(word_limit: u32) -> String {
    format!(
        "You are in STAGE 1 of enhanced reasoning. Apply Chain of Draft (CoD) methodology \
         with EXACTLY {word_limit} words per step.\n\
         \n\
         CRITICAL INSTRUCTIONS:\n\
         1. First, analyze the problem complexity and structure\n\
         2. Then apply Chain of Draft (CoD) methodology with EXACTLY {word_limit} words per step\n\
         3. Provide initial reflection on your reasoning\n\
         4. End with a draft solution\n\
         \n\
         FORMAT:\n\
         {SECTION_MARKER}{PROBLEM_ANALYSIS}\n\
         [Analyze complexity, identify key components, determine approach]\n\
         \n\
         {SECTION_MARKER}{CHAIN_OF_DRAFT_STEPS}\n\
         CoD Step 1: [{word_limit} words maximum]\n\
         CoD Step 2: [{word_limit} words maximum]\n\
         CoD Step 3: [{word_limit} words maximum]\n\
         [Continue as needed...]\n\
         \n\
         {SECTION_MARKER}{INITIAL_REFLECTION}\n\
         [Reflect on reasoning quality, identify potential issues, assess confidence]\n\
         \n\
         {SECTION_MARKER}{DRAFT_SOLUTION}\n\
         [Provide initial solution based on CoD analysis]\n\
         \n\
         Remember: This is STAGE 1. Be thorough but prepare for STAGE 2 verification."
    )
}

/// Stage 2: verify the stage-1 draft and finalize.
///
/// The prior stage text is embedded verbatim. An empty prior text produces a
/// template with an empty embedded block, which is degraded but not an error:
/// the builder cannot judge semantic completeness of free text.
pub fn stage2_prompt(verification_depth: VerificationDepth, prior_stage_text: &str) -> String {
    format!(
        "You are in STAGE 2 of enhanced reasoning. Perform {verification_depth} verification \
         and provide the final comprehensive answer.\n\
         \n\
         STAGE 1 ANALYSIS:\n\
         {prior_stage_text}\n\
         \n\
         Your task:\n\
         1. CRITICALLY EXAMINE the Stage 1 analysis and CoD steps\n\
         2. VERIFY each reasoning step for accuracy and logical consistency\n\
         3. CHECK for mathematical errors, logical fallacies, or incomplete reasoning\n\
         4. EXPLORE alternative approaches if needed\n\
         5. ASSESS confidence levels and identify uncertainties\n\
         6. PROVIDE a comprehensive final answer\n\
         \n\
         VERIFICATION CHECKLIST:\n\
         - Are all CoD steps logically sound?\n\
         - Are there any mathematical or computational errors?\n\
         - Are assumptions clearly stated and reasonable?\n\
         - Have alternative approaches been considered?\n\
         - Is the reasoning complete and comprehensive?\n\
         - Are there any gaps or weaknesses in the logic?\n\
         \n\
         FORMAT:\n\
         {SECTION_MARKER}{STAGE2_VERIFICATION}\n\
         [Critical analysis of Stage 1 reasoning]\n\
         \n\
         {SECTION_MARKER}{ERROR_DETECTION}\n\
         [Identify and correct any errors found]\n\
         \n\
         {SECTION_MARKER}{ALTERNATIVE_APPROACHES}\n\
         [Consider alternative solution paths]\n\
         \n\
         {SECTION_MARKER}{CONFIDENCE_ASSESSMENT}\n\
         [Evaluate confidence levels and identify uncertainties]\n\
         \n\
         {SECTION_MARKER}{FINAL_ANSWER}\n\
         [Definitive, well-reasoned solution with full explanation]\n\
         \n\
         {SECTION_MARKER}{REFLECTION_SUMMARY}\n\
         [Key insights, lessons learned, and reasoning quality assessment]"
    )
}

/// System prompt for the single-stage, tool-enabled chat mode.
pub fn agent_system_prompt() -> String {
    "You are an advanced research assistant with Chain of Deliberation methodology \
     and agentic tools.\n\
     \n\
     AVAILABLE TOOLS:\n\
     - cod_analysis: systematic Chain of Draft analysis of complex problems\n\
     - memory_store: store important information in categorized memory\n\
     - verification_analysis: deep verification of reasoning and solutions\n\
     - enhanced_research: comprehensive research with multiple methodologies\n\
     - web_search: real-time web search for current information\n\
     \n\
     REASONING APPROACH:\n\
     1. Assess whether the query needs CoD methodology\n\
     2. Use web_search for current events, real-time data, or fact verification\n\
     3. For complex analysis, use cod_analysis with an appropriate complexity level\n\
     4. Verify critical solutions with verification_analysis\n\
     5. Store important findings with memory_store\n\
     \n\
     Provide clear, structured responses. Be systematic and thorough while \
     maintaining clarity and practical applicability."
        .to_string()
}
