//! Argument validation against an [`ActionSpec`].
//!
//! Validation is purely syntactic and never touches the network. A call that
//! fails here is never turned into an outbound request.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::schema::{
    ActionSpec, AmountMode, Bounds, ParamKind, ParamSpec, QueryParam, Route, RouteSpec,
};

/// Decoded length of a Solana public key.
const PUBKEY_BYTES: usize = 32;

/// Base58 length range of a 32-byte key.
const PUBKEY_MIN_CHARS: usize = 32;
const PUBKEY_MAX_CHARS: usize = 44;

/// Errors raised for malformed caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required parameter '{field}'")]
    Missing { field: String },

    #[error("parameter '{field}' is required when '{switch}' is '{value}'")]
    MissingForBranch {
        field: String,
        switch: String,
        value: String,
    },

    #[error("parameter '{field}' must be one of [{allowed}], got '{value}'")]
    NotAllowed {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("parameter '{field}' must be a number")]
    NotANumber { field: String },

    #[error("parameter '{field}' must be {constraint}, got {value}")]
    OutOfRange {
        field: String,
        constraint: String,
        value: f64,
    },

    #[error("parameter '{field}' is not a valid base58 Solana public key")]
    InvalidPubkey { field: String },

    #[error("parameter '{field}' must be a non-empty string other than '.' or '..'")]
    InvalidText { field: String },
}

impl ValidationError {
    /// Name of the offending parameter.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::MissingForBranch { field, .. }
            | Self::NotAllowed { field, .. }
            | Self::NotANumber { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidPubkey { field }
            | Self::InvalidText { field } => field,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }
}

/// A validated parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(f64),
}

impl ParamValue {
    /// Remote encoding: text verbatim, numbers in shortest round-trip form
    /// (`50`, `0.1`, `2.5`).
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

/// Validated arguments for a single action call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
    action: &'static str,
    values: BTreeMap<&'static str, ParamValue>,
}

impl ToolRequest {
    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        self.values.get(field)
    }

    /// Value of a field the route depends on.
    pub fn require(&self, field: &str) -> Result<&ParamValue, ValidationError> {
        self.get(field)
            .ok_or_else(|| ValidationError::missing(field))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validate raw tool-call arguments.
pub fn validate(
    spec: &ActionSpec,
    arguments: &Map<String, Value>,
) -> Result<ToolRequest, ValidationError> {
    for name in arguments.keys() {
        if spec.param_spec(name).is_none() {
            debug!(action = spec.name, "Ignoring undeclared argument '{}'", name);
        }
    }

    let mut values = BTreeMap::new();
    for param in &spec.params {
        match arguments.get(param.name) {
            None | Some(Value::Null) => {
                if param.required {
                    return Err(ValidationError::missing(param.name));
                }
            }
            Some(raw) => {
                values.insert(param.name, check_param(param, raw)?);
            }
        }
    }

    let request = ToolRequest {
        action: spec.name,
        values,
    };

    let route = resolve_route(spec, &request)?;
    check_amount_modes(route, &request)?;

    Ok(request)
}

/// Pick the route for a validated request, enforcing branch requirements.
pub fn resolve_route<'a>(
    spec: &'a ActionSpec,
    request: &ToolRequest,
) -> Result<&'a Route, ValidationError> {
    match &spec.route {
        RouteSpec::Fixed(route) => Ok(route),
        RouteSpec::Switch { field, branches } => {
            let selected = request
                .require(field)?
                .as_text()
                .ok_or_else(|| ValidationError::InvalidText {
                    field: field.to_string(),
                })?;

            let branch = branches
                .iter()
                .find(|branch| branch.value == selected)
                .ok_or_else(|| ValidationError::NotAllowed {
                    field: field.to_string(),
                    value: selected.to_string(),
                    allowed: branches
                        .iter()
                        .map(|branch| branch.value)
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;

            for required in branch.requires {
                if request.get(required).is_none() {
                    return Err(ValidationError::MissingForBranch {
                        field: required.to_string(),
                        switch: field.to_string(),
                        value: branch.value.to_string(),
                    });
                }
            }

            Ok(&branch.route)
        }
    }
}

/// Non-blank and not a dot segment, which URL path building would drop.
fn is_usable_text(value: &str) -> bool {
    !value.trim().is_empty() && !matches!(value, "." | "..")
}

/// Whether `value` is syntactically a Solana public key.
pub fn is_plausible_pubkey(value: &str) -> bool {
    if !(PUBKEY_MIN_CHARS..=PUBKEY_MAX_CHARS).contains(&value.len()) {
        return false;
    }
    bs58::decode(value)
        .into_vec()
        .is_ok_and(|bytes| bytes.len() == PUBKEY_BYTES)
}

fn check_param(param: &ParamSpec, raw: &Value) -> Result<ParamValue, ValidationError> {
    let field = || param.name.to_string();

    match param.kind {
        ParamKind::Text => match raw {
            Value::String(text) if is_usable_text(text) => Ok(ParamValue::Text(text.clone())),
            // Identifiers such as proposal ids are often sent as bare numbers.
            Value::Number(number) => Ok(ParamValue::Text(number.to_string())),
            _ => Err(ValidationError::InvalidText { field: field() }),
        },
        ParamKind::Pubkey => match raw {
            Value::String(key) if is_plausible_pubkey(key) => Ok(ParamValue::Text(key.clone())),
            _ => Err(ValidationError::InvalidPubkey { field: field() }),
        },
        ParamKind::Choice(allowed) => {
            let token = match raw {
                Value::String(token) => token.clone(),
                other => other.to_string(),
            };
            if allowed.contains(&token.as_str()) {
                Ok(ParamValue::Text(token))
            } else {
                Err(ValidationError::NotAllowed {
                    field: field(),
                    value: token,
                    allowed: allowed.join(", "),
                })
            }
        }
        ParamKind::Number(bounds) => {
            let number = match raw {
                Value::Number(number) => number.as_f64(),
                Value::String(text) => text.trim().parse::<f64>().ok(),
                _ => None,
            }
            .ok_or_else(|| ValidationError::NotANumber { field: field() })?;

            check_bounds(param.name, number, bounds)?;
            Ok(ParamValue::Number(number))
        }
    }
}

fn check_bounds(field: &str, value: f64, bounds: Bounds) -> Result<(), ValidationError> {
    if value.is_finite() && bounds.contains(value) {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field: field.to_string(),
        constraint: if value.is_finite() {
            bounds.to_string()
        } else {
            "a finite number".to_string()
        },
        value,
    })
}

/// Percentages are capped at 100 regardless of the field's own bounds.
fn check_amount_modes(route: &Route, request: &ToolRequest) -> Result<(), ValidationError> {
    for query in &route.query {
        let QueryParam::AmountByMode {
            mode_field,
            value_field,
        } = query
        else {
            continue;
        };

        let mode = request.require(mode_field)?.as_text().and_then(AmountMode::parse);
        if mode == Some(AmountMode::Percentage) {
            if let Some(value) = request.require(value_field)?.as_number() {
                check_bounds(value_field, value, Bounds::PERCENTAGE)?;
            }
        }
    }
    Ok(())
}
