//! Tool-enabled chat loop
//!
//! One model turn may request tool calls; results are appended to the
//! conversation before the model continues. Tool failures are contained to
//! that tool's result text and never abort the turn. Rounds are bounded so
//! a misbehaving model cannot spin quota.

use chrono::Utc;
use serde_json::Value;
use tracing::warn;

use crate::config::CONFIG;
use crate::llm::{ChatMessage, CompletionRequest, Provider};
use crate::orchestrator::ChatSettings;
use crate::prompt::agent_system_prompt;
use crate::tools::{ToolExecutor, ToolInvocation, tool_definitions};

use super::error::{ApiError, ApiResult};
use super::types::IncomingMessage;

pub struct ChatTurnOutcome {
    pub message: String,
    pub tool_invocations: Vec<ToolInvocation>,
}

pub async fn run_chat_turn(
    provider: &dyn Provider,
    executor: &ToolExecutor,
    incoming: Vec<IncomingMessage>,
    settings: &ChatSettings,
) -> ApiResult<ChatTurnOutcome> {
    let mut messages = vec![ChatMessage::system(agent_system_prompt())];
    for msg in incoming {
        messages.push(ChatMessage {
            role: msg.role,
            content: Some(msg.content),
            tool_calls: None,
            tool_call_id: None,
        });
    }

    let tools = tool_definitions();
    let mut invocations: Vec<ToolInvocation> = Vec::new();

    for _round in 0..CONFIG.max_tool_rounds {
        let response = provider
            .create(CompletionRequest {
                messages: messages.clone(),
                tools: tools.clone(),
                temperature: settings.temperature,
                max_tokens: settings.max_tokens,
                top_p: settings.top_p,
            })
            .await?;

        if response.tool_calls.is_empty() {
            return Ok(ChatTurnOutcome {
                message: response.text,
                tool_invocations: invocations,
            });
        }

        messages.push(ChatMessage::assistant_tool_calls(
            (!response.text.is_empty()).then(|| response.text.clone()),
            response.tool_calls.clone(),
        ));

        for call in response.tool_calls {
            let args: Value =
                serde_json::from_str(&call.function.arguments).unwrap_or(Value::Null);

            // Rejected arguments and tool-body failures both become result
            // text; the turn itself keeps going.
            let result = match executor.execute(&call.function.name, &args).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(tool = %call.function.name, error = %e, "tool call rejected");
                    format!("❌ **Tool Error**: {}", e)
                }
            };

            invocations.push(ToolInvocation {
                tool_name: call.function.name.clone(),
                args,
                result: Some(result.clone()),
                timestamp: Utc::now(),
            });

            messages.push(ChatMessage::tool_result(call.id, result));
        }
    }

    warn!(rounds = CONFIG.max_tool_rounds, "tool round limit exceeded");
    Err(ApiError::internal(
        "Model kept requesting tools past the round limit",
    ))
}
