//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of the enabled action tools
//! - In-process dispatch of tool calls by name
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use super::definitions::ActionTool;
use super::error::ToolError;
use crate::domains::actions::{ActionCatalog, ActionPipeline};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all enabled tools.
#[derive(Clone)]
pub struct ToolRegistry {
    catalog: Arc<ActionCatalog>,
    pipeline: ActionPipeline,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Arc<ActionCatalog>, pipeline: ActionPipeline) -> Self {
        Self { catalog, pipeline }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.catalog.names()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.catalog
            .iter()
            .map(|spec| ActionTool::to_tool(spec))
            .collect()
    }

    /// Dispatch a tool call to the matching action.
    ///
    /// Action failures are reported inside the returned result; only an
    /// unknown tool or non-object arguments are errors.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let Some(spec) = self.catalog.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };

        Ok(ActionTool::execute(spec, &self.pipeline, &arguments).await)
    }
}
