
//! Configuration of a [`Resolver`](super::Resolver).

use crate::error::ConfigError;
use crate::value::Value;

use num::ToPrimitive;
use serde::{Serialize, Deserialize};

/// A value which means "no unit" when given to the resolver.
///
/// In JSON, a sentinel is written as `null`, an integer, or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sentinel {
  None,
  Integer(i64),
  Text(String),
}

/// What to do when a unit string does not have exactly one fewer
/// operator than it has operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArityPolicy {
  /// Reject the string with an error.
  #[default]
  Strict,
  /// Skip combination steps that have no operator, and ignore
  /// trailing operators.
  Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
  pub no_unit: Vec<Sentinel>,
  pub arity: ArityPolicy,
}

impl Sentinel {
  /// Whether `value` is this sentinel. An integer sentinel also
  /// matches a float of the same numerical value.
  pub fn matches(&self, value: &Value) -> bool {
    match (self, value) {
      (Sentinel::None, Value::None) => true,
      (Sentinel::Integer(a), Value::Integer(b)) => a == b,
      (Sentinel::Integer(a), Value::Float(b)) => b.fract() == 0.0 && b.to_i64() == Some(*a),
      (Sentinel::Text(a), Value::Text(b)) => a == b,
      _ => false,
    }
  }

  pub fn default_set() -> Vec<Sentinel> {
    vec![Sentinel::None, Sentinel::Integer(1), Sentinel::Text(String::new())]
  }
}

impl ResolverConfig {
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn with_arity(mut self, arity: ArityPolicy) -> Self {
    self.arity = arity;
    self
  }

  pub fn is_no_unit(&self, value: &Value) -> bool {
    self.no_unit.iter().any(|sentinel| sentinel.matches(value))
  }

  /// Whether the string is one of the configured text sentinels.
  pub fn is_no_unit_text(&self, text: &str) -> bool {
    self.no_unit.iter().any(|sentinel| matches!(sentinel, Sentinel::Text(s) if s == text))
  }
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      no_unit: Sentinel::default_set(),
      arity: ArityPolicy::default(),
    }
  }
}
