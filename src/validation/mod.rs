//! Declarative request validation.
//!
//! Each field carries an ordered chain of [`Rule`]s. [`evaluate`] runs every
//! rule of every chain, never stopping at the first failure, and returns the
//! failures as a flat list of [`Violation`]s.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub mod checks;
pub mod rules;

pub use rules::FieldRules;

/// Where a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    Field,
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    #[serde(rename = "msg")]
    pub message: String,
    #[serde(rename = "path")]
    pub field: String,
    pub location: Location,
}

pub type Check = fn(Option<&Value>) -> bool;

/// A predicate paired with the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// The raw, untyped view of a request that rules are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    params: Vec<(String, String)>,
    body: Value,
}

impl RequestInput {
    pub fn new(params: Vec<(String, String)>, body: Value) -> Self {
        Self { params, body }
    }

    /// Input with only a JSON body.
    pub fn from_body(body: Value) -> Self {
        Self::new(Vec::new(), body)
    }

    /// Input with only path parameters and an empty body.
    pub fn from_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(params, Value::Object(Map::new()))
    }

    pub fn get(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Params => self
                .params
                .iter()
                .find(|(key, _)| key == field)
                .map(|(_, value)| Value::String(value.clone())),
            Location::Body => self.body.get(field).cloned(),
        }
    }
}

/// Run every chain against `input`, collecting all failures in chain order.
pub fn evaluate(chains: &[FieldRules], input: &RequestInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    for chain in chains {
        let value = input.get(chain.location, chain.field);
        for rule in chain.rules {
            if !(rule.check)(value.as_ref()) {
                violations.push(Violation {
                    kind: ViolationKind::Field,
                    value: value.clone(),
                    message: rule.message.to_string(),
                    field: chain.field.to_string(),
                    location: chain.location,
                });
            }
        }
    }
    violations
}

/// A typed request built from [`RequestInput`] once its rules have passed.
pub trait Validate: Sized {
    const RULES: &'static [FieldRules];

    /// Only called when `evaluate(Self::RULES, input)` came back empty.
    fn from_input(input: &RequestInput) -> Option<Self>;
}
