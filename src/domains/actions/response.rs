//! Response normalization.
//!
//! Every outcome of a call, including failures that never reached the
//! network, ends up as a [`ToolResult`].

use reqwest::StatusCode;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ActionError;

/// Raw outcome of dispatching an [`ActionRequest`](super::request::ActionRequest).
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResponse {
    /// The remote answered, whatever the status.
    Http { status: u16, body: String },
    /// No usable answer: connect failure, timeout or unreadable body.
    Transport { cause: String, timed_out: bool },
}

impl ActionResponse {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport {
            cause: cause.into(),
            timed_out: false,
        }
    }

    pub fn timeout(cause: impl Into<String>) -> Self {
        Self::Transport {
            cause: cause.into(),
            timed_out: true,
        }
    }
}

// ============================================================================
// Tool Result
// ============================================================================

/// Failure category reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationError,
    ConfigurationError,
    TransportError,
    RemoteError,
}

/// Unsigned transaction returned by the Blink API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSuccess {
    /// Base64 transaction, exactly as returned.
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining top-level response fields.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionFailure {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Uniform result of a tool call.
///
/// Serializes as `{"success": true, "result": {...}}` or
/// `{"success": false, "error": {...}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    Success(ActionSuccess),
    Failure(ActionFailure),
}

impl ToolResult {
    pub fn failure(kind: ErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Failure(ActionFailure {
            kind,
            message: message.into(),
            status,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Failure kind, `None` on success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.kind),
        }
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        match self {
            Self::Success(success) => match &success.message {
                Some(message) => format!("Transaction ready: {}", message),
                None => "Transaction ready for signing".to_string(),
            },
            Self::Failure(failure) => match failure.status {
                Some(status) => format!("{} (HTTP {})", failure.message, status),
                None => failure.message.clone(),
            },
        }
    }
}

impl Serialize for ToolResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success(success) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("result", success)?;
            }
            Self::Failure(failure) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", failure)?;
            }
        }
        map.end()
    }
}

impl From<ActionError> for ToolResult {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Validation(e) => Self::failure(ErrorKind::ValidationError, e.to_string(), None),
            ActionError::UnknownAction(name) => Self::failure(
                ErrorKind::ValidationError,
                format!("Unknown action: {}", name),
                None,
            ),
            ActionError::Configuration(message) => {
                Self::failure(ErrorKind::ConfigurationError, message, None)
            }
            ActionError::Transport(message) => Self::failure(ErrorKind::TransportError, message, None),
            ActionError::Remote { status, message } => {
                Self::failure(ErrorKind::RemoteError, message, status)
            }
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Turn a raw dispatch outcome into a [`ToolResult`].
pub fn normalize(response: ActionResponse) -> ToolResult {
    match response {
        ActionResponse::Transport { cause, timed_out } => {
            let message = if timed_out {
                format!("request timed out: {}", cause)
            } else {
                cause
            };
            ToolResult::from(ActionError::transport(message))
        }
        ActionResponse::Http { status, body } => normalize_http(status, &body),
    }
}

fn normalize_http(status: u16, body: &str) -> ToolResult {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if !(200..300).contains(&status) {
        let message = parsed
            .as_ref()
            .and_then(remote_message)
            .or_else(|| non_empty(body))
            .or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        return ActionError::remote(Some(status), message).into();
    }

    let fields = match parsed {
        Some(Value::Object(fields)) => fields,
        Some(_) => {
            return ActionError::remote(Some(status), "response missing transaction field").into();
        }
        None => {
            return ActionError::transport(format!(
                "could not interpret response body (HTTP {})",
                status
            ))
            .into();
        }
    };

    if let Some(error) = fields.get("error").filter(|error| !error.is_null()) {
        let message = error_message(error).unwrap_or_else(|| error.to_string());
        return ActionError::remote(Some(status), message).into();
    }

    let mut metadata = fields;
    let transaction = match metadata.remove("transaction") {
        Some(Value::String(transaction)) => transaction,
        _ => {
            return ActionError::remote(Some(status), "response missing transaction field").into();
        }
    };
    let message = match metadata.remove("message") {
        Some(Value::String(message)) => Some(message),
        Some(other) => {
            metadata.insert("message".into(), other);
            None
        }
        None => None,
    };

    ToolResult::Success(ActionSuccess {
        transaction,
        message,
        metadata,
    })
}

/// The remote's own explanation: `error` (string, or its `message`), else `message`.
fn remote_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(error_message)
        .or_else(|| body.get("message").and_then(Value::as_str).map(str::to_string))
}

fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn non_empty(body: &str) -> Option<String> {
    (!body.trim().is_empty()).then(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TX: &str = "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABAAEDArczbMia1tLmq7zz4DinMNN0pJ1JtLdqIJPUw3YrGCzYAMHBsgN27lcgB6H2WQvFgyZuJYHa46puOQo9yQ8CVQbd9uHXZaGT2cvhRs7reawctIXtX1s3kTqM9YV+/wCp";

    fn failure(result: &ToolResult) -> &ActionFailure {
        match result {
            ToolResult::Failure(failure) => failure,
            ToolResult::Success(_) => panic!("expected failure, got {result:?}"),
        }
    }

    #[test]
    fn test_success_preserves_payload_and_metadata() {
        let body = json!({
            "transaction": TX,
            "message": "Deposit 10 USDC",
            "links": { "next": { "type": "post" } },
        })
        .to_string();

        let result = normalize(ActionResponse::http(200, body));
        match result {
            ToolResult::Success(success) => {
                assert_eq!(success.transaction, TX);
                assert_eq!(success.message.as_deref(), Some("Deposit 10 USDC"));
                assert_eq!(
                    success.metadata.get("links"),
                    Some(&json!({ "next": { "type": "post" } }))
                );
                assert!(!success.metadata.contains_key("transaction"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_success_without_transaction_is_remote_error() {
        let result = normalize(ActionResponse::http(200, r#"{"message":"ok"}"#));
        let failure = failure(&result);
        assert_eq!(failure.kind, ErrorKind::RemoteError);
        assert_eq!(failure.message, "response missing transaction field");
        assert_eq!(failure.status, Some(200));
    }

    #[test]
    fn test_success_status_with_error_field() {
        let result = normalize(ActionResponse::http(
            200,
            r#"{"error":{"message":"Insufficient balance"}}"#,
        ));
        let failure = failure(&result);
        assert_eq!(failure.kind, ErrorKind::RemoteError);
        assert_eq!(failure.message, "Insufficient balance");
    }

    #[test]
    fn test_success_status_with_invalid_json() {
        let result = normalize(ActionResponse::http(200, "<html>gateway</html>"));
        assert_eq!(result.error_kind(), Some(ErrorKind::TransportError));
    }

    #[test]
    fn test_client_error_uses_remote_message() {
        let result = normalize(ActionResponse::http(
            400,
            r#"{"error":"Invalid market address"}"#,
        ));
        let failure = failure(&result);
        assert_eq!(failure.kind, ErrorKind::RemoteError);
        assert_eq!(failure.message, "Invalid market address");
        assert_eq!(failure.status, Some(400));
    }

    #[test]
    fn test_server_error_falls_back_to_body_text() {
        let result = normalize(ActionResponse::http(502, "upstream unavailable"));
        let failure = failure(&result);
        assert_eq!(failure.message, "upstream unavailable");
        assert_eq!(failure.status, Some(502));

        let result = normalize(ActionResponse::http(503, ""));
        assert_eq!(failure_message(&result), "Service Unavailable");

        let result = normalize(ActionResponse::http(503, "  \n"));
        assert_eq!(failure_message(&result), "Service Unavailable");
    }

    #[test]
    fn test_body_text_is_kept_verbatim() {
        let body = "  Bad Gateway\n<html>proxy error</html>\n";
        let result = normalize(ActionResponse::http(502, body));
        assert_eq!(failure_message(&result), body);
    }

    fn failure_message(result: &ToolResult) -> String {
        failure(result).message.clone()
    }

    #[test]
    fn test_top_level_message_used_when_no_error_field() {
        let result = normalize(ActionResponse::http(422, r#"{"message":"Amount too small"}"#));
        assert_eq!(failure_message(&result), "Amount too small");
    }

    #[test]
    fn test_timeout_is_transport_error() {
        let result = normalize(ActionResponse::timeout("no response after 30s"));
        let failure = failure(&result);
        assert_eq!(failure.kind, ErrorKind::TransportError);
        assert!(failure.message.contains("timed out"));
        assert_eq!(failure.status, None);
    }

    #[test]
    fn test_serialized_envelope() {
        let result = ToolResult::failure(ErrorKind::ValidationError, "bad input", None);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "error": { "kind": "validation_error", "message": "bad input" }
            })
        );

        let result = normalize(ActionResponse::http(200, json!({ "transaction": TX }).to_string()));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "result": { "transaction": TX } })
        );
    }

    #[test]
    fn test_action_error_kinds() {
        let result: ToolResult = ActionError::configuration("BLINK_CLIENT_KEY is not set").into();
        assert_eq!(result.error_kind(), Some(ErrorKind::ConfigurationError));

        let result: ToolResult = ActionError::remote(Some(404), "not found").into();
        assert_eq!(result.summary(), "not found (HTTP 404)");
    }
}
