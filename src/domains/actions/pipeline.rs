//! The validate -> build -> dispatch -> normalize pipeline.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use super::client::{ActionDispatcher, BlinkClient};
use super::error::ActionResult;
use super::request::{ActionRequest, RequestBuilder};
use super::response::{ToolResult, normalize};
use super::schema::ActionSpec;
use super::validator::validate;
use crate::core::config::BlinkConfig;

/// Executes action calls end to end.
///
/// Stateless apart from the shared HTTP client; clones are cheap.
#[derive(Clone)]
pub struct ActionPipeline {
    builder: RequestBuilder,
    dispatcher: Arc<dyn ActionDispatcher>,
}

impl ActionPipeline {
    pub fn new(builder: RequestBuilder, dispatcher: Arc<dyn ActionDispatcher>) -> Self {
        Self {
            builder,
            dispatcher,
        }
    }

    /// Pipeline dispatching over HTTP with the configured timeout.
    pub fn from_config(config: &BlinkConfig) -> ActionResult<Self> {
        let client = BlinkClient::new(config.timeout())?;
        Ok(Self::new(RequestBuilder::new(config), Arc::new(client)))
    }

    /// Validate and build without dispatching.
    pub fn prepare(
        &self,
        spec: &ActionSpec,
        arguments: &Map<String, Value>,
    ) -> ActionResult<ActionRequest> {
        let request = validate(spec, arguments)?;
        self.builder.build(spec, &request)
    }

    /// Run one tool call. Never fails: every outcome is a [`ToolResult`].
    #[instrument(skip_all, fields(action = %spec.name, provider = %spec.provider))]
    pub async fn execute(&self, spec: &ActionSpec, arguments: &Map<String, Value>) -> ToolResult {
        info!("Action tool called: '{}'", spec.name);

        let request = match self.prepare(spec, arguments) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected before dispatch: {}", e);
                return e.into();
            }
        };

        debug!(url = %request.url, "Dispatching Blink request");
        let response = self.dispatcher.dispatch(&request).await;
        let result = normalize(response);

        match &result {
            ToolResult::Success(_) => info!("Transaction built for '{}'", spec.name),
            ToolResult::Failure(failure) => warn!(
                kind = ?failure.kind,
                status = ?failure.status,
                "Action failed: {}",
                failure.message
            ),
        }

        result
    }
}
