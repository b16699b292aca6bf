//! HTTP handlers.

use axum::{
    Json,
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use tracing::info;

use crate::config::CONFIG;
use crate::orchestrator::{ChatSettings, DraftOrchestrator};
use crate::render::render;
use crate::tools::tool_definitions;

use super::AppState;
use super::chat::run_chat_turn;
use super::error::{ApiError, ApiResult};
use super::types::{
    API_VERSION, ChatApiRequest, ChatApiResponse, CodApiRequest, CodReportMeta, RenderApiRequest,
    RenderApiResponse, StatusResponse,
};

pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: API_VERSION,
        model: CONFIG.model.clone(),
        tools: tool_definitions().len(),
        model_credential: state.provider.is_some(),
        search_credential: state.executor.search_credential_configured(),
    })
}

/// Single-stage chat with the tool registry advertised to the model.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatApiRequest>,
) -> ApiResult<Json<ChatApiResponse>> {
    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| ApiError::configuration("Model API key not configured"))?;

    if request.messages.is_empty() {
        return Err(ApiError::bad_request("messages must not be empty"));
    }

    let settings = request.settings.unwrap_or_default();
    settings.validate().map_err(ApiError::bad_request)?;

    info!(messages = request.messages.len(), "chat request received");

    let outcome = run_chat_turn(provider.as_ref(), &state.executor, request.messages, &settings)
        .await?;

    Ok(Json(ChatApiResponse {
        message: outcome.message,
        tool_invocations: outcome.tool_invocations,
    }))
}

/// Two-stage Chain of Draft flow. The calls run sequentially; the combined
/// report is then streamed back as SSE chunks with a trailing `done` event
/// carrying the report metadata.
pub async fn cod_chat_handler(
    State(state): State<AppState>,
    Json(request): Json<CodApiRequest>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let provider = state
        .provider
        .clone()
        .ok_or_else(|| ApiError::configuration("Model API key not configured"))?;

    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("message must not be empty"));
    }

    let settings: ChatSettings = request.settings.unwrap_or_default();
    settings.validate().map_err(ApiError::bad_request)?;

    let orchestrator = DraftOrchestrator::new(provider);
    let report = orchestrator.run(&request.message, &settings).await?;

    let meta = CodReportMeta {
        id: report.id.clone(),
        level: report.level,
        word_limit: report.word_limit,
        verification_depth: report.verification_depth,
    };

    // The report is complete at this point; wrap it into a small stream so
    // the transport matches the streaming chat surface.
    let events = vec![
        Ok(Event::default().event("text").data(sse_text(&report.header()))),
        Ok(Event::default().event("text").data(sse_text(&report.stage1))),
        Ok(Event::default().event("text").data(sse_text(&report.stage2))),
        Ok(Event::default()
            .event("done")
            .data(serde_json::to_string(&meta).unwrap_or_default())),
    ];

    Ok(Sse::new(stream::iter(events)))
}

/// SSE data fields cannot carry carriage returns.
fn sse_text(text: &str) -> String {
    text.replace('\r', "")
}

/// Renderer as a service: structured text in, styled markup out.
pub async fn render_handler(
    Json(request): Json<RenderApiRequest>,
) -> Json<RenderApiResponse> {
    Json(RenderApiResponse {
        html: render(&request.text),
    })
}
