//! Declarative action records.
//!
//! An [`ActionSpec`] describes one Blink action completely: the parameters a
//! caller must supply and how those parameters are laid out in the outbound
//! request (path segments and query string). Adding an action means adding a
//! record to the catalog, never a new code path.

use std::fmt;

/// Name of the parameter carrying the signer's public key.
pub const TX_SENDER_FIELD: &str = "tx_sender_pubkey";

// ============================================================================
// Parameters
// ============================================================================

/// Lower bound of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Value must be strictly greater than the bound.
    Exclusive(f64),
    /// Value must be greater than or equal to the bound.
    Inclusive(f64),
}

/// Allowed range of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Option<Bound>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
}

impl Bounds {
    /// Any finite number.
    pub const ANY: Bounds = Bounds {
        min: None,
        max: None,
    };

    /// Strictly positive numbers.
    pub const POSITIVE: Bounds = Bounds {
        min: Some(Bound::Exclusive(0.0)),
        max: None,
    };

    /// Percentages in (0, 100].
    pub const PERCENTAGE: Bounds = Bounds {
        min: Some(Bound::Exclusive(0.0)),
        max: Some(100.0),
    };

    /// Numbers strictly greater than `value`.
    pub const fn greater_than(value: f64) -> Self {
        Self {
            min: Some(Bound::Exclusive(value)),
            max: None,
        }
    }

    /// Numbers greater than or equal to `value`.
    pub const fn at_least(value: f64) -> Self {
        Self {
            min: Some(Bound::Inclusive(value)),
            max: None,
        }
    }

    /// Whether `value` lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        let above_min = match self.min {
            Some(Bound::Exclusive(min)) => value > min,
            Some(Bound::Inclusive(min)) => value >= min,
            None => true,
        };
        let below_max = self.max.is_none_or(|max| value <= max);
        above_min && below_max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = match self.min {
            Some(Bound::Exclusive(min)) => Some(format!("greater than {min}")),
            Some(Bound::Inclusive(min)) => Some(format!("at least {min}")),
            None => None,
        };
        let max = self.max.map(|max| format!("at most {max}"));
        match (min, max) {
            (Some(min), Some(max)) => write!(f, "{min} and {max}"),
            (Some(bound), None) | (None, Some(bound)) => f.write_str(&bound),
            (None, None) => f.write_str("a finite number"),
        }
    }
}

/// The type and constraint of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Free-form non-empty text (token symbols, proposal ids).
    Text,
    /// Base58-encoded Solana public key.
    Pubkey,
    /// One of a fixed set of tokens, passed to the remote API verbatim.
    Choice(&'static [&'static str]),
    /// A finite number within the given bounds.
    Number(Bounds),
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub examples: &'static [&'static str],
}

impl ParamSpec {
    const fn new(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
            examples: &[],
        }
    }

    pub const fn text(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Text)
    }

    pub const fn pubkey(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Pubkey)
    }

    pub const fn choice(
        name: &'static str,
        description: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::new(name, description, ParamKind::Choice(allowed))
    }

    pub const fn number(name: &'static str, description: &'static str, bounds: Bounds) -> Self {
        Self::new(name, description, ParamKind::Number(bounds))
    }

    /// The signer public key every action requires.
    pub const fn tx_sender() -> Self {
        Self::pubkey(
            TX_SENDER_FIELD,
            "Solana account public key of the transaction sender",
        )
        .examples(&["C7GCggFP3464XJK4DudqkSkMjQSeKbNa9SMTf26tPQ5E"])
    }

    /// Mark the parameter as optional.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach example values (shown in the tool schema).
    pub const fn examples(mut self, examples: &'static [&'static str]) -> Self {
        self.examples = examples;
        self
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Part of a path segment template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Text(&'static str),
    Field(&'static str),
}

/// One path segment, e.g. `{paying_token}-{perp_token}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pieces: Vec<Piece>,
}

impl Segment {
    /// Parse a segment template. `{name}` is a placeholder; an unclosed brace
    /// is kept as literal text.
    pub fn parse(template: &'static str) -> Self {
        let mut pieces = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            if open > 0 {
                pieces.push(Piece::Text(&rest[..open]));
            }
            pieces.push(Piece::Field(&rest[open + 1..open + close]));
            rest = &rest[open + close + 1..];
        }
        if !rest.is_empty() {
            pieces.push(Piece::Text(rest));
        }
        Self { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Names of the fields referenced by this segment.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Field(name) => Some(*name),
            Piece::Text(_) => None,
        })
    }
}

/// How an amount is expressed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountMode {
    Percentage,
    Amount,
}

impl AmountMode {
    /// Tokens accepted for the mode field, in declaration order.
    pub const TOKENS: &'static [&'static str] = &["percentage", "amount"];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "percentage" => Some(Self::Percentage),
            "amount" => Some(Self::Amount),
            _ => None,
        }
    }
}

/// One query parameter of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    /// Fixed `key=value` pair.
    Literal {
        key: &'static str,
        value: &'static str,
    },
    /// `key=<value of field>`.
    Field {
        key: &'static str,
        field: &'static str,
    },
    /// `percentage=<value>` or `amount=<value>` depending on `mode_field`.
    AmountByMode {
        mode_field: &'static str,
        value_field: &'static str,
    },
}

impl QueryParam {
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::Literal { .. } => Vec::new(),
            Self::Field { field, .. } => vec![*field],
            Self::AmountByMode {
                mode_field,
                value_field,
            } => vec![*mode_field, *value_field],
        }
    }
}

/// Path and query layout of a request, relative to the provider host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub segments: Vec<Segment>,
    pub query: Vec<QueryParam>,
}

impl Route {
    /// Create a route from a path template such as `/perps/{perp_token}-PERP/open`.
    pub fn new(path: &'static str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(Segment::parse)
                .collect(),
            query: Vec::new(),
        }
    }

    pub fn literal(mut self, key: &'static str, value: &'static str) -> Self {
        self.query.push(QueryParam::Literal { key, value });
        self
    }

    pub fn field(mut self, key: &'static str, field: &'static str) -> Self {
        self.query.push(QueryParam::Field { key, field });
        self
    }

    pub fn amount_by_mode(mut self, mode_field: &'static str, value_field: &'static str) -> Self {
        self.query.push(QueryParam::AmountByMode {
            mode_field,
            value_field,
        });
        self
    }

    /// Every field the route reads, in the order it reads them.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<_> = self.segments.iter().flat_map(Segment::fields).collect();
        fields.extend(self.query.iter().flat_map(QueryParam::fields));
        fields
    }
}

/// A route selected by the value of a choice parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub value: &'static str,
    /// Optional parameters that become required on this branch.
    pub requires: &'static [&'static str],
    pub route: Route,
}

impl Branch {
    pub fn new(value: &'static str, route: Route) -> Self {
        Self {
            value,
            requires: &[],
            route,
        }
    }

    pub fn requires(mut self, fields: &'static [&'static str]) -> Self {
        self.requires = fields;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteSpec {
    Fixed(Route),
    Switch {
        field: &'static str,
        branches: Vec<Branch>,
    },
}

// ============================================================================
// Actions
// ============================================================================

/// A single Blink action exposed as one MCP tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    /// Tool name, e.g. `jupiter_perps_open`.
    pub name: &'static str,
    /// Human-readable title, e.g. `Jupiter Perps Open`.
    pub title: &'static str,
    /// Subdomain of the Blink provider host (`jupiter` for `jupiter.dial.to`).
    pub provider: &'static str,
    pub description: &'static str,
    /// Natural-language requests this action is meant to serve.
    pub suggestions: &'static [&'static str],
    pub params: Vec<ParamSpec>,
    pub route: RouteSpec,
}

impl ActionSpec {
    pub fn new(
        name: &'static str,
        title: &'static str,
        provider: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            title,
            provider,
            description,
            suggestions: &[],
            params: Vec::new(),
            route: RouteSpec::Fixed(Route::new("/")),
        }
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn route(mut self, route: Route) -> Self {
        self.route = RouteSpec::Fixed(route);
        self
    }

    pub fn switch(mut self, field: &'static str, branches: Vec<Branch>) -> Self {
        self.route = RouteSpec::Switch { field, branches };
        self
    }

    pub fn suggestions(mut self, suggestions: &'static [&'static str]) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Look up a declared parameter.
    pub fn param_spec(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    /// All routes this action may take.
    pub fn routes(&self) -> Vec<&Route> {
        match &self.route {
            RouteSpec::Fixed(route) => vec![route],
            RouteSpec::Switch { branches, .. } => {
                branches.iter().map(|branch| &branch.route).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_parse_mixed() {
        let segment = Segment::parse("{paying_token}-{perp_token}");
        assert_eq!(
            segment.pieces(),
            &[
                Piece::Field("paying_token"),
                Piece::Text("-"),
                Piece::Field("perp_token")
            ]
        );
    }

    #[test]
    fn test_segment_parse_suffix_and_unclosed() {
        let segment = Segment::parse("{perp_token}-PERP");
        assert_eq!(
            segment.pieces(),
            &[Piece::Field("perp_token"), Piece::Text("-PERP")]
        );

        let segment = Segment::parse("odd{brace");
        assert_eq!(segment.pieces(), &[Piece::Text("odd{brace")]);
    }

    #[test]
    fn test_route_fields_in_order() {
        let route = Route::new("/perps/{position_type}/{paying_token}-{perp_token}")
            .literal("action", "open")
            .field("amount", "amount")
            .field("leverage", "leverage");
        assert_eq!(
            route.fields(),
            vec![
                "position_type",
                "paying_token",
                "perp_token",
                "amount",
                "leverage"
            ]
        );
    }

    #[test]
    fn test_bounds_contains() {
        assert!(Bounds::POSITIVE.contains(0.5));
        assert!(!Bounds::POSITIVE.contains(0.0));
        assert!(Bounds::PERCENTAGE.contains(100.0));
        assert!(!Bounds::PERCENTAGE.contains(100.5));
        assert!(Bounds::at_least(1.0).contains(1.0));
        assert!(!Bounds::greater_than(1.0).contains(1.0));
        assert!(Bounds::ANY.contains(-3.0));
    }

    #[test]
    fn test_bounds_display() {
        assert_eq!(Bounds::POSITIVE.to_string(), "greater than 0");
        assert_eq!(
            Bounds::PERCENTAGE.to_string(),
            "greater than 0 and at most 100"
        );
        assert_eq!(Bounds::at_least(1.0).to_string(), "at least 1");
    }

    #[test]
    fn test_amount_mode_tokens_parse() {
        for token in AmountMode::TOKENS {
            assert!(AmountMode::parse(token).is_some());
        }
        assert_eq!(AmountMode::parse("Percentage"), None);
    }
}
