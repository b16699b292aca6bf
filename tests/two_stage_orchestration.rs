//! Orchestrator behavior against a scripted provider: sequencing, failure
//! short-circuit, adaptive settings flowing into the stage prompts.

mod common;

use std::sync::Arc;

use cod_studio::complexity::VerificationDepth;
use cod_studio::llm::{MessageRole, ProviderError};
use cod_studio::orchestrator::{ChatSettings, DraftOrchestrator, ReasoningMode};
use common::MockProvider;

fn standard_settings() -> ChatSettings {
    ChatSettings {
        reasoning_mode: ReasoningMode::Standard,
        verification_depth: VerificationDepth::Deep,
        word_limit: 120,
        temperature: 0.7,
        max_tokens: 2000,
        top_p: 0.9,
    }
}

#[tokio::test]
async fn stage2_is_never_issued_when_stage1_fails() {
    let provider = Arc::new(MockProvider::new(vec![Err(ProviderError::Api {
        status: 500,
        body: "upstream exploded".into(),
    })]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    let result = orchestrator
        .run("Solve the equation", &standard_settings())
        .await;

    assert!(result.is_err(), "stage-1 failure must fail the orchestration");
    assert_eq!(provider.call_count(), 1, "stage 2 must not burn quota");
}

#[tokio::test]
async fn successful_run_concatenates_both_stages() {
    let provider = Arc::new(MockProvider::with_texts(&["STAGE1 DRAFT", "STAGE2 FINAL"]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    let report = orchestrator
        .run("Solve the equation", &standard_settings())
        .await
        .expect("both stages succeed");

    assert_eq!(provider.call_count(), 2);
    assert_eq!(report.stage1, "STAGE1 DRAFT");
    assert_eq!(report.stage2, "STAGE2 FINAL");

    let combined = report.combined_text();
    assert!(combined.contains("STAGE1 DRAFT"));
    assert!(combined.contains("STAGE2 FINAL"));
    assert!(combined.starts_with(&report.header()));
    assert!(report.header().contains("word limit: 120"));
}

#[tokio::test]
async fn stage2_prompt_embeds_stage1_output_verbatim() {
    let provider = Arc::new(MockProvider::with_texts(&[
        "CoD Step 1: draft reasoning here.",
        "done",
    ]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    orchestrator
        .run("Solve the equation", &standard_settings())
        .await
        .unwrap();

    let requests = provider.requests();
    let stage2_system = requests[1].messages[0].content.clone().unwrap();
    assert_eq!(requests[1].messages[0].role, MessageRole::System);
    assert_eq!(
        stage2_system
            .matches("CoD Step 1: draft reasoning here.")
            .count(),
        1
    );
}

#[tokio::test]
async fn stage2_runs_at_lower_temperature() {
    let provider = Arc::new(MockProvider::with_texts(&["a", "b"]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    orchestrator
        .run("Solve the equation", &standard_settings())
        .await
        .unwrap();

    let requests = provider.requests();
    assert!(requests[1].temperature < requests[0].temperature);
}

#[tokio::test]
async fn adaptive_basic_input_uses_lowest_band_values() {
    let provider = Arc::new(MockProvider::with_texts(&["a", "b"]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    let settings = ChatSettings {
        reasoning_mode: ReasoningMode::Adaptive,
        ..standard_settings()
    };
    let report = orchestrator.run("What is 2+2?", &settings).await.unwrap();

    assert_eq!(report.word_limit, 75);
    assert_eq!(report.verification_depth, VerificationDepth::Basic);

    // Both stage prompts carry the band's fixed values literally
    let requests = provider.requests();
    let stage1_system = requests[0].messages[0].content.clone().unwrap();
    assert!(stage1_system.contains("EXACTLY 75 words per step"));
    let stage2_system = requests[1].messages[0].content.clone().unwrap();
    assert!(stage2_system.contains("Perform basic verification"));
    assert!((requests[0].temperature - 0.3).abs() < 1e-6);
    assert_eq!(requests[0].max_tokens, 8_000);
}

#[tokio::test]
async fn adaptive_research_input_uses_top_band_values() {
    let provider = Arc::new(MockProvider::with_texts(&["a", "b"]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    let settings = ChatSettings {
        reasoning_mode: ReasoningMode::Adaptive,
        ..standard_settings()
    };
    let message = "Conduct a comprehensive, detailed, thorough, in-depth study: \
                   investigate and examine the hypothesis, design the experiment, \
                   collect data and analysis of results with proof.";
    let report = orchestrator.run(message, &settings).await.unwrap();

    assert_eq!(report.word_limit, 200);
    assert_eq!(report.verification_depth, VerificationDepth::Research);

    let requests = provider.requests();
    assert!((requests[0].temperature - 0.2).abs() < 1e-6);
    assert_eq!(requests[0].max_tokens, 12_000);
    let stage2_system = requests[1].messages[0].content.clone().unwrap();
    assert!(stage2_system.contains("Perform research verification"));
}

#[tokio::test]
async fn orchestration_calls_carry_no_tools() {
    let provider = Arc::new(MockProvider::with_texts(&["a", "b"]));
    let orchestrator = DraftOrchestrator::new(provider.clone());

    orchestrator
        .run("Solve the equation", &standard_settings())
        .await
        .unwrap();

    for request in provider.requests() {
        assert!(request.tools.is_empty());
    }
}
