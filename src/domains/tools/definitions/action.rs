//! Blink action tool definition.
//!
//! Unlike hand-written tools, every action tool shares this single
//! definition. The tool metadata and input schema are derived from the
//! action's [`ActionSpec`].

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::{Map, Number, Value, json};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::domains::actions::schema::{Bound, ParamKind, ParamSpec};
use crate::domains::actions::{ActionPipeline, ActionSpec, ToolResult};

/// Base58 alphabet, 32 to 44 characters.
const PUBKEY_PATTERN: &str = "^[1-9A-HJ-NP-Za-km-z]{32,44}$";

// ============================================================================
// Tool Definition
// ============================================================================

/// Tool exposing one Blink action.
pub struct ActionTool;

impl ActionTool {
    /// Create a Tool model for an action (metadata).
    pub fn to_tool(spec: &ActionSpec) -> Tool {
        Tool {
            name: spec.name.into(),
            description: Some(spec.description.into()),
            input_schema: Arc::new(Self::input_schema(spec)),
            annotations: None,
            output_schema: Some(Arc::new(Self::output_schema())),
            icons: None,
            meta: None,
            title: Some(spec.title.to_string()),
        }
    }

    /// JSON Schema of the action's arguments.
    pub fn input_schema(spec: &ActionSpec) -> JsonObject {
        let properties: Map<String, Value> = spec
            .params
            .iter()
            .map(|param| (param.name.to_string(), param_schema(param)))
            .collect();

        let required: Vec<Value> = spec
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| Value::from(param.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        schema
    }

    /// JSON Schema of the structured result envelope.
    pub fn output_schema() -> JsonObject {
        let schema = json!({
            "type": "object",
            "properties": {
                "success": { "type": "boolean" },
                "result": {
                    "type": "object",
                    "properties": {
                        "transaction": { "type": "string" },
                        "message": { "type": "string" },
                        "metadata": { "type": "object" }
                    },
                    "required": ["transaction"]
                },
                "error": {
                    "type": "object",
                    "properties": {
                        "kind": {
                            "type": "string",
                            "enum": [
                                "validation_error",
                                "configuration_error",
                                "transport_error",
                                "remote_error"
                            ]
                        },
                        "message": { "type": "string" },
                        "status": { "type": "integer" }
                    },
                    "required": ["kind", "message"]
                }
            },
            "required": ["success"]
        });

        match schema {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Convert a pipeline result into an MCP tool result.
    pub fn into_call_result(result: &ToolResult) -> CallToolResult {
        let structured = match serde_json::to_value(result) {
            Ok(structured) => structured,
            Err(e) => {
                warn!("Failed to serialize tool result: {}", e);
                return CallToolResult::error(vec![Content::text(format!(
                    "failed to serialize result: {}",
                    e
                ))]);
            }
        };
        CallToolResult {
            content: vec![
                Content::text(result.summary()),
                Content::text(structured.to_string()),
            ],
            structured_content: Some(structured),
            is_error: Some(!result.is_success()),
            meta: None,
        }
    }

    /// Execute the action and wrap the result.
    pub async fn execute(
        spec: &ActionSpec,
        pipeline: &ActionPipeline,
        arguments: &JsonObject,
    ) -> CallToolResult {
        let result = pipeline.execute(spec, arguments).await;
        Self::into_call_result(&result)
    }

    /// Execute the action unless `cancellation` fires first.
    ///
    /// Cancelling drops the in-flight HTTP call and produces no result.
    pub async fn execute_cancellable(
        spec: &ActionSpec,
        pipeline: &ActionPipeline,
        arguments: &JsonObject,
        cancellation: &CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        tokio::select! {
            result = Self::execute(spec, pipeline, arguments) => Ok(result),
            _ = cancellation.cancelled() => {
                warn!("Tool call '{}' cancelled", spec.name);
                Err(McpError::internal_error(
                    format!("tool call '{}' was cancelled", spec.name),
                    None,
                ))
            }
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(spec: Arc<ActionSpec>, pipeline: ActionPipeline) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(&spec), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let cancellation = ctx.request_context.ct.clone();
            let spec = spec.clone();
            let pipeline = pipeline.clone();
            async move { Self::execute_cancellable(&spec, &pipeline, &args, &cancellation).await }
                .boxed()
        })
    }
}

fn param_schema(param: &ParamSpec) -> Value {
    let mut schema = Map::new();

    match param.kind {
        ParamKind::Text => {
            schema.insert("type".into(), json!("string"));
            schema.insert("minLength".into(), json!(1));
        }
        ParamKind::Pubkey => {
            schema.insert("type".into(), json!("string"));
            schema.insert("pattern".into(), json!(PUBKEY_PATTERN));
        }
        ParamKind::Choice(allowed) => {
            schema.insert("type".into(), json!("string"));
            schema.insert("enum".into(), json!(allowed));
        }
        ParamKind::Number(bounds) => {
            schema.insert("type".into(), json!("number"));
            match bounds.min {
                Some(Bound::Exclusive(min)) => {
                    schema.insert("exclusiveMinimum".into(), json!(min));
                }
                Some(Bound::Inclusive(min)) => {
                    schema.insert("minimum".into(), json!(min));
                }
                None => {}
            }
            if let Some(max) = bounds.max {
                schema.insert("maximum".into(), json!(max));
            }
        }
    }

    schema.insert("description".into(), json!(param.description));

    if !param.examples.is_empty() {
        let examples: Vec<Value> = param
            .examples
            .iter()
            .map(|example| example_value(param.kind, example))
            .collect();
        schema.insert("examples".into(), Value::Array(examples));
    }

    Value::Object(schema)
}

/// Numeric examples are declared as text; emit them as JSON numbers.
fn example_value(kind: ParamKind, example: &str) -> Value {
    match kind {
        ParamKind::Number(_) => example
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| json!(example)),
        _ => json!(example),
    }
}

// ============================================================================
// Tests
// ============================================================================
