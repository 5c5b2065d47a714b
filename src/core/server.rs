//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are generated from the action catalog in `domains/actions/catalog/`.
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new action does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as AppResult;
use crate::domains::{
    actions::{ActionCatalog, ActionDispatcher, ActionPipeline, RequestBuilder},
    prompts::PromptService,
    tools::{ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Actions enabled for this deployment.
    catalog: Arc<ActionCatalog>,

    /// Shared request pipeline (holds the HTTP connection pool).
    pipeline: ActionPipeline,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server dispatching over HTTP.
    pub fn new(config: Config) -> AppResult<Self> {
        let pipeline = ActionPipeline::from_config(&config.blink)?;
        Self::with_pipeline(config, pipeline)
    }

    /// Create a server with a custom dispatcher (used by tests).
    pub fn with_dispatcher(config: Config, dispatcher: Arc<dyn ActionDispatcher>) -> AppResult<Self> {
        let pipeline = ActionPipeline::new(RequestBuilder::new(&config.blink), dispatcher);
        Self::with_pipeline(config, pipeline)
    }

    fn with_pipeline(config: Config, pipeline: ActionPipeline) -> AppResult<Self> {
        let catalog = Arc::new(ActionCatalog::builtin().select(&config.actions.enabled)?);
        info!("Serving {} action tool(s)", catalog.len());

        let prompt_service = Arc::new(PromptService::new(&catalog));

        Ok(Self {
            tool_router: build_tool_router::<Self>(&catalog, &pipeline),
            config: Arc::new(config),
            catalog,
            pipeline,
            prompt_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Actions served by this instance.
    pub fn catalog(&self) -> &Arc<ActionCatalog> {
        &self.catalog
    }

    /// Registry for calling tools in-process.
    pub fn registry(&self) -> ToolRegistry {
        ToolRegistry::new(self.catalog.clone(), self.pipeline.clone())
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> String {
        format!(
            "Builds unsigned Solana transactions for DeFi actions through the Dialect Blink API. \
             Every tool requires `tx_sender_pubkey`, the account that will sign. Results carry a \
             base64 transaction for the user to review and sign; nothing is signed or broadcast \
             by this server. Available actions: {}.",
            self.catalog.names().join(", ")
        )
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Prompt arguments are strings; numbers are accepted in their JSON form.
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| match v {
                    serde_json::Value::String(s) => Some((k, s)),
                    serde_json::Value::Number(n) => Some((k, n.to_string())),
                    _ => None,
                })
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
