//! Outbound request construction.
//!
//! [`RequestBuilder::build`] is pure: the same validated request and the same
//! configuration always produce the same [`ActionRequest`], down to the
//! rendered URL string.

use std::fmt;

use reqwest::{Method, Url};
use serde_json::{Value, json};

use super::error::{ActionError, ActionResult};
use super::schema::{ActionSpec, AmountMode, Piece, QueryParam, Segment, TX_SENDER_FIELD};
use super::validator::{ToolRequest, ValidationError, resolve_route};
use crate::core::config::BlinkConfig;

/// Header carrying the Blink client key.
pub const CLIENT_KEY_HEADER: &str = "X-Blink-Client-Key";

/// Query parameter carrying the correlation UUID.
pub const BIN_QUERY_KEY: &str = "_bin";

const PROVIDER_PLACEHOLDER: &str = "{provider}";

// ============================================================================
// Action Request
// ============================================================================

/// A fully specified Blink API call.
#[derive(Clone, PartialEq)]
pub struct ActionRequest {
    pub action: &'static str,
    pub provider: &'static str,
    pub method: Method,
    /// Rendered URL, path and query included.
    pub url: Url,
    /// Decoded path segments, in order.
    pub segments: Vec<String>,
    /// Decoded query pairs, in order. The last pair is always `_bin`.
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl ActionRequest {
    /// Value of a header, if set.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of a query parameter, if set.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Custom Debug implementation to redact the client key from logs.
impl fmt::Debug for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(CLIENT_KEY_HEADER) {
                    (*name, "[REDACTED]")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();

        f.debug_struct("ActionRequest")
            .field("action", &self.action)
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

// ============================================================================
// Request Builder
// ============================================================================

/// Maps validated tool requests onto Blink API calls.
#[derive(Clone)]
pub struct RequestBuilder {
    client_key: Option<String>,
    bin_uuid: String,
    host_template: String,
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("client_key", &self.client_key.as_ref().map(|_| "[REDACTED]"))
            .field("bin_uuid", &self.bin_uuid)
            .field("host_template", &self.host_template)
            .finish()
    }
}

impl RequestBuilder {
    pub fn new(config: &BlinkConfig) -> Self {
        Self {
            client_key: config.client_key.clone(),
            bin_uuid: config.bin_uuid.clone(),
            host_template: config.host_template.clone(),
        }
    }

    /// Base URL of a provider, e.g. `https://jupiter.dial.to/`.
    pub fn provider_base(&self, provider: &str) -> ActionResult<Url> {
        let raw = self.host_template.replace(PROVIDER_PLACEHOLDER, provider);
        let url = Url::parse(&raw).map_err(|e| {
            ActionError::configuration(format!("invalid Blink host '{}': {}", raw, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(ActionError::configuration(format!(
                "Blink host '{}' cannot carry a path",
                raw
            )));
        }
        Ok(url)
    }

    /// Build the outbound request for a validated tool call.
    pub fn build(&self, spec: &ActionSpec, request: &ToolRequest) -> ActionResult<ActionRequest> {
        let client_key = self
            .client_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ActionError::configuration("BLINK_CLIENT_KEY is not set"))?;

        let route = resolve_route(spec, request)?;

        let segments = route
            .segments
            .iter()
            .map(|segment| render_segment(segment, request))
            .collect::<Result<Vec<_>, _>>()?;

        let mut query = route
            .query
            .iter()
            .map(|param| render_query(param, request))
            .collect::<Result<Vec<_>, _>>()?;
        query.push((BIN_QUERY_KEY, self.bin_uuid.clone()));

        let mut url = self.provider_base(spec.provider)?;
        url.path_segments_mut()
            .map_err(|_| ActionError::configuration("Blink host cannot carry a path"))?
            .pop_if_empty()
            .extend(&segments);

        let encoded = serde_urlencoded::to_string(&query)
            .map_err(|e| ActionError::configuration(format!("failed to encode query: {}", e)))?;
        url.set_query(Some(&encoded));

        let account = request.require(TX_SENDER_FIELD)?.render();

        Ok(ActionRequest {
            action: spec.name,
            provider: spec.provider,
            method: Method::POST,
            url,
            segments,
            query,
            headers: vec![
                ("Content-Type", "application/json".to_string()),
                (CLIENT_KEY_HEADER, client_key.to_string()),
            ],
            body: json!({
                "type": "transaction",
                "account": account,
            }),
        })
    }
}

fn render_segment(segment: &Segment, request: &ToolRequest) -> Result<String, ValidationError> {
    let mut rendered = String::new();
    for piece in segment.pieces() {
        match piece {
            Piece::Text(text) => rendered.push_str(text),
            Piece::Field(field) => rendered.push_str(&request.require(field)?.render()),
        }
    }
    Ok(rendered)
}

fn render_query(
    param: &QueryParam,
    request: &ToolRequest,
) -> Result<(&'static str, String), ValidationError> {
    match param {
        QueryParam::Literal { key, value } => Ok((*key, value.to_string())),
        QueryParam::Field { key, field } => Ok((*key, request.require(field)?.render())),
        QueryParam::AmountByMode {
            mode_field,
            value_field,
        } => {
            let token = request.require(mode_field)?.render();
            let mode = AmountMode::parse(&token).ok_or_else(|| ValidationError::NotAllowed {
                field: mode_field.to_string(),
                value: token.clone(),
                allowed: AmountMode::TOKENS.join(", "),
            })?;
            let value = request.require(value_field)?.render();

            let key = match mode {
                AmountMode::Percentage => "percentage",
                AmountMode::Amount => "amount",
            };
            Ok((key, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::actions::catalog::ActionCatalog;
    use crate::domains::actions::validator::validate;
    use serde_json::Map;

    const SENDER: &str = "C7GCggFP3464XJK4DudqkSkMjQSeKbNa9SMTf26tPQ5E";
    const BIN: &str = "6874794c-513e-456f-801f-5957a82e068e";

    fn config() -> BlinkConfig {
        BlinkConfig {
            client_key: Some("test-client-key".to_string()),
            ..BlinkConfig::default()
        }
    }

    fn build(action: &str, arguments: Value) -> ActionResult<ActionRequest> {
        let catalog = ActionCatalog::builtin();
        let spec = catalog.get(action).unwrap();
        let arguments: Map<String, Value> = arguments.as_object().cloned().unwrap();
        let request = validate(spec, &arguments)?;
        RequestBuilder::new(&config()).build(spec, &request)
    }

    fn kamino(amount_type: &str, amount: f64) -> ActionRequest {
        build(
            "kamino_deposit",
            json!({
                "market": "DxXdAyU3kCjnyggvHmY5nAwg5cRbbmdyX3npfDMjjMek",
                "reserve": "Ga4rZytCpq1unD4DbEJ5bkHeUz9g3oh9AAFEi6vSauXp",
                "amount_type": amount_type,
                "amount": amount,
                "tx_sender_pubkey": SENDER,
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_drift_perps_open_field_names() {
        let request = build(
            "drift_perps_open",
            json!({
                "perp_token": "SOL",
                "position_type": "long",
                "paying_token": "USDC",
                "amount": 100,
                "leverage": 5,
                "tx_sender_pubkey": SENDER,
            }),
        )
        .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            format!(
                "https://drift.dial.to/perps/SOL-PERP/open?positionType=long&payingToken=USDC&amount=100&leverage=5&_bin={BIN}"
            )
        );
        assert_eq!(request.segments, vec!["perps", "SOL-PERP", "open"]);
    }

    #[test]
    fn test_headers_and_body() {
        let request = kamino("amount", 10.0);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header(CLIENT_KEY_HEADER), Some("test-client-key"));
        assert_eq!(
            request.body,
            json!({ "type": "transaction", "account": SENDER })
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = kamino("amount", 2.5);
        let second = kamino("amount", 2.5);
        assert_eq!(first, second);
        assert_eq!(first.url.as_str(), second.url.as_str());
    }

    #[test]
    fn test_amount_mode_percentage() {
        let request = kamino("percentage", 50.0);
        assert_eq!(request.query_value("percentage"), Some("50"));
        assert_eq!(request.query_value("amount"), None);
    }

    #[test]
    fn test_amount_mode_amount() {
        let request = kamino("amount", 0.1);
        assert_eq!(request.query_value("amount"), Some("0.1"));
        assert_eq!(request.query_value("percentage"), None);
    }

    #[test]
    fn test_bin_uuid_is_last_query_pair() {
        let request = kamino("amount", 1.0);
        assert_eq!(request.query.last(), Some(&(BIN_QUERY_KEY, BIN.to_string())));
    }

    #[test]
    fn test_switch_route_selected_by_discriminator() {
        let request = build(
            "jupiter_dao",
            json!({
                "action": "vote",
                "proposal_id": "42",
                "vote_type": "against",
                "tx_sender_pubkey": SENDER,
            }),
        )
        .unwrap();
        assert_eq!(request.segments, vec!["dao", "vote", "42", "against"]);

        let request = build(
            "jupiter_dao",
            json!({ "action": "stake", "amount": 12, "tx_sender_pubkey": SENDER }),
        )
        .unwrap();
        assert_eq!(request.segments, vec!["dao", "stake", "12"]);
    }

    #[test]
    fn test_path_placeholders_are_escaped() {
        let request = build(
            "marginfi_supply",
            json!({ "token": "a/b c", "amount": 1, "tx_sender_pubkey": SENDER }),
        )
        .unwrap();
        assert_eq!(request.segments[1], "a/b c");
        assert!(request.url.path().starts_with("/supply/a%2Fb%20c/"));
    }

    #[test]
    fn test_dot_segment_never_reaches_url() {
        let err = build(
            "marginfi_supply",
            json!({ "token": "..", "amount": 5, "tx_sender_pubkey": SENDER }),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ActionError::Validation(ValidationError::InvalidText { ref field }) if field == "token"
        ));

        let err = build(
            "lulo_withdraw",
            json!({ "symbol": ".", "amount": 5, "tx_sender_pubkey": SENDER }),
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));
    }

    #[test]
    fn test_missing_client_key_is_configuration_error() {
        let catalog = ActionCatalog::builtin();
        let spec = catalog.get("raydium_staking_claim").unwrap();
        let arguments: Map<String, Value> = json!({ "tx_sender_pubkey": SENDER })
            .as_object()
            .cloned()
            .unwrap();
        let request = validate(spec, &arguments).unwrap();

        let builder = RequestBuilder::new(&BlinkConfig::default());
        let err = builder.build(spec, &request).unwrap_err();
        assert!(matches!(err, ActionError::Configuration(_)));
    }

    #[test]
    fn test_custom_host_template() {
        let builder = RequestBuilder::new(&BlinkConfig {
            host_template: "http://127.0.0.1:8080/{provider}".to_string(),
            ..config()
        });
        let base = builder.provider_base("save").unwrap();
        assert_eq!(base.as_str(), "http://127.0.0.1:8080/save");
    }

    #[test]
    fn test_debug_redacts_client_key() {
        let request = kamino("amount", 1.0);
        let debug = format!("{:?}", request);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("test-client-key"));

        let builder = format!("{:?}", RequestBuilder::new(&config()));
        assert!(!builder.contains("test-client-key"));
    }
}
