//! Router-level checks: status, configuration errors, the chat tool loop,
//! the render endpoint, and the SSE surface of the two-stage flow.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use cod_studio::llm::{MessageRole, Provider};
use cod_studio::server::{AppState, create_router};
use cod_studio::tools::web_search::TavilyClient;
use cod_studio::tools::{InMemoryStore, ToolExecutor};
use common::{MockProvider, text_response, tool_call_response};

fn state_with_provider(provider: Option<Arc<dyn Provider>>) -> AppState {
    let search = TavilyClient::new(None, Duration::from_secs(1)).unwrap();
    AppState {
        provider,
        executor: Arc::new(ToolExecutor::new(Arc::new(InMemoryStore::new()), search)),
    }
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn status_reports_missing_credentials() {
    let app = create_router(state_with_provider(None));

    let response = app
        .oneshot(Request::builder().uri("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["tools"], 5);
    assert_eq!(body["model_credential"], false);
    assert_eq!(body["search_credential"], false);
}

#[tokio::test]
async fn chat_without_model_credential_is_a_configuration_error() {
    let app = create_router(state_with_provider(None));

    let response = app
        .oneshot(json_request(
            "/api/chat",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["error_code"], "CONFIG_ERROR");
    assert_eq!(body["message"], "Model API key not configured");
}

#[tokio::test]
async fn cod_endpoint_without_model_credential_is_a_configuration_error() {
    let app = create_router(state_with_provider(None));

    let response = app
        .oneshot(json_request("/api/chat/cod", json!({"message": "hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error_code"], "CONFIG_ERROR");
}

#[tokio::test]
async fn chat_with_empty_messages_is_a_bad_request() {
    let provider = Arc::new(MockProvider::with_texts(&["unused"]));
    let app = create_router(state_with_provider(Some(provider)));

    let response = app
        .oneshot(json_request("/api/chat", json!({"messages": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_rejects_out_of_range_settings() {
    let provider = Arc::new(MockProvider::with_texts(&["unused"]));
    let app = create_router(state_with_provider(Some(provider)));

    let response = app
        .oneshot(json_request(
            "/api/chat",
            json!({
                "messages": [{"role": "user", "content": "hi"}],
                "settings": {"temperature": 9.0}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("temperature"));
}

#[tokio::test]
async fn chat_returns_model_text_when_no_tools_requested() {
    let provider = Arc::new(MockProvider::with_texts(&["plain answer"]));
    let app = create_router(state_with_provider(Some(provider)));

    let response = app
        .oneshot(json_request(
            "/api/chat",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "plain answer");
    assert_eq!(body["tool_invocations"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn chat_tool_loop_executes_and_feeds_back_results() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(tool_call_response(
            "call_1",
            "cod_analysis",
            r#"{"problem": "sort", "complexity_level": "basic", "word_limit": 75}"#,
        )),
        Ok(text_response("final answer")),
    ]));
    let app = create_router(state_with_provider(Some(provider.clone())));

    let response = app
        .oneshot(json_request(
            "/api/chat",
            json!({"messages": [{"role": "user", "content": "analyze sorting"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "final answer");

    let invocations = body["tool_invocations"].as_array().unwrap();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0]["tool_name"], "cod_analysis");
    assert!(
        invocations[0]["result"]
            .as_str()
            .unwrap()
            .contains("Chain of Deliberation")
    );

    // The second model call must carry the tool result message
    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    let tool_msg = requests[1]
        .messages
        .iter()
        .find(|m| m.role == MessageRole::Tool)
        .expect("tool result appended to conversation");
    assert_eq!(tool_msg.tool_call_id.as_deref(), Some("call_1"));
}

#[tokio::test]
async fn chat_contains_tool_failures_within_the_turn() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(tool_call_response("call_1", "web_search", r#"{"query": "news"}"#)),
        Ok(text_response("answered without search")),
    ]));
    let app = create_router(state_with_provider(Some(provider)));

    let response = app
        .oneshot(json_request(
            "/api/chat",
            json!({"messages": [{"role": "user", "content": "whats new"}]}),
        ))
        .await
        .unwrap();

    // No search credential configured: the tool reports a labeled error but
    // the chat turn still succeeds.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "answered without search");
    let result = body["tool_invocations"][0]["result"].as_str().unwrap();
    assert!(result.contains("Web Search Error"));
}

#[tokio::test]
async fn cod_endpoint_streams_the_combined_report() {
    let provider = Arc::new(MockProvider::with_texts(&["STAGE1 DRAFT", "STAGE2 FINAL"]));
    let app = create_router(state_with_provider(Some(provider)));

    let response = app
        .oneshot(json_request("/api/chat/cod", json!({"message": "What is 2+2?"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/event-stream"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("STAGE1 DRAFT"));
    assert!(body.contains("STAGE2 FINAL"));
    assert!(body.contains("event: done"));
    assert!(body.contains("\"word_limit\":75"));
}

#[tokio::test]
async fn cod_endpoint_fails_whole_request_when_stage1_fails() {
    use cod_studio::llm::ProviderError;

    let provider = Arc::new(MockProvider::new(vec![Err(ProviderError::Api {
        status: 503,
        body: "overloaded".into(),
    })]));
    let app = create_router(state_with_provider(Some(provider.clone())));

    let response = app
        .oneshot(json_request("/api/chat/cod", json!({"message": "hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error_code"], "UPSTREAM_ERROR");
    assert_eq!(provider.call_count(), 1, "no partial result, no second call");
}

#[tokio::test]
async fn render_endpoint_wraps_known_sections() {
    let app = create_router(state_with_provider(None));

    let response = app
        .oneshot(json_request(
            "/api/render",
            json!({"text": "#### FINAL COMPREHENSIVE ANSWER\nIt is **4**."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("cod-final-answer"));
    assert!(html.contains("<strong>4</strong>"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = create_router(state_with_provider(None));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
