//! HTTP dispatch of Blink requests.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::{ActionError, ActionResult};
use super::request::ActionRequest;
use super::response::ActionResponse;

/// Upper bound on connection establishment, independent of the call timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends an [`ActionRequest`] and reports what came back.
///
/// Implementations never fail: every problem is described by the returned
/// [`ActionResponse`].
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    async fn dispatch(&self, request: &ActionRequest) -> ActionResponse;
}

/// Dispatcher backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct BlinkClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl BlinkClient {
    pub fn new(timeout: Duration) -> ActionResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(CONNECT_TIMEOUT))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ActionError::configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn failure(&self, err: &reqwest::Error) -> ActionResponse {
        if err.is_timeout() {
            ActionResponse::timeout(format!("no response after {}s", self.timeout.as_secs_f64()))
        } else if err.is_connect() {
            ActionResponse::transport(format!("connection failed: {}", root_cause(err)))
        } else {
            ActionResponse::transport(root_cause(err))
        }
    }
}

#[async_trait]
impl ActionDispatcher for BlinkClient {
    async fn dispatch(&self, request: &ActionRequest) -> ActionResponse {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone())
            .body(request.body.to_string());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return self.failure(&e),
        };

        let status = response.status().as_u16();
        debug!(action = request.action, status, "Blink API responded");

        match response.text().await {
            Ok(body) => ActionResponse::http(status, body),
            Err(e) => self.failure(&e),
        }
    }
}

/// Innermost error message, without the chain of wrappers.
fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
