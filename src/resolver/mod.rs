
//! Resolution of unit descriptions into unit expressions.
//!
//! A unit string is a whitespace-separated sequence of unit names,
//! integer literals, and the operators `*`, `/`, `+`, `-`, and `**`.
//! Operands are combined strictly left-to-right, with no notion of
//! operator precedence, so `"m / s ** 2"` means `(m / s) ** 2`.

pub mod config;

pub use config::{ResolverConfig, ArityPolicy, Sentinel};

use crate::classify::{DimensionTag, classify_unit};
use crate::error::UnitError;
use crate::expr::Expr;
use crate::units::registry::{UnitRegistry, PrefixRegistry, TableRegistry, default_registry};
use crate::value::Value;

use num::pow::Pow;
use phf::phf_map;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Mul,
  Div,
  Add,
  Sub,
  Pow,
}

static OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
  "*" => Operator::Mul,
  "/" => Operator::Div,
  "+" => Operator::Add,
  "-" => Operator::Sub,
  "**" => Operator::Pow,
};

/// Resolves unit references against a registry.
///
/// A `Resolver` holds no mutable state, so a single instance may be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Resolver<R> {
  registry: R,
  config: ResolverConfig,
}

#[derive(Debug, Clone)]
enum Token {
  Operator(Operator),
  Operand(Expr),
}

impl Operator {
  pub fn from_token(token: &str) -> Option<Operator> {
    OPERATORS.get(token).copied()
  }

  pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
    match self {
      Operator::Mul => lhs * rhs,
      Operator::Div => lhs / rhs,
      Operator::Add => lhs + rhs,
      Operator::Sub => lhs - rhs,
      Operator::Pow => lhs.pow(rhs),
    }
  }
}

impl Resolver<PrefixRegistry<TableRegistry>> {
  /// A resolver over [`default_registry`] with the default
  /// configuration.
  pub fn with_defaults() -> Self {
    Self::new(default_registry(), ResolverConfig::default())
  }
}

impl<R: UnitRegistry> Resolver<R> {
  pub fn new(registry: R, config: ResolverConfig) -> Self {
    Self { registry, config }
  }

  /// Resolves a unit reference.
  ///
  /// Expressions are returned unchanged, strings are parsed as unit
  /// descriptions, and "no unit" sentinels resolve to the
  /// dimensionless identity. Anything else is an error.
  pub fn resolve(&self, input: &Value) -> Result<Expr, UnitError> {
    match input {
      Value::Expr(expr) => Ok(expr.clone()),
      Value::Text(text) => self.resolve_str(text),
      value if self.config.is_no_unit(value) => {
        debug!(kind = value.kind_name(), "No-unit sentinel resolved to dimensionless");
        Ok(Expr::dimensionless())
      }
      value => Err(UnitError::UnrecognizedInput(value.kind_name().to_owned())),
    }
  }

  pub fn resolve_str(&self, input: &str) -> Result<Expr, UnitError> {
    if self.config.is_no_unit_text(input) {
      debug!(input, "No-unit sentinel resolved to dimensionless");
      return Ok(Expr::dimensionless());
    }

    let mut operators = Vec::new();
    let mut operands = Vec::new();
    for token in input.split_whitespace() {
      match self.classify_token(token)? {
        Token::Operator(op) => operators.push(op),
        Token::Operand(expr) => operands.push(expr),
      }
    }

    if operands.is_empty() {
      return Err(UnitError::NoOperands(input.to_owned()));
    }
    if operators.len() + 1 != operands.len() {
      match self.config.arity {
        ArityPolicy::Strict => {
          return Err(UnitError::ArityMismatch {
            input: input.to_owned(),
            operands: operands.len(),
            operators: operators.len(),
          });
        }
        ArityPolicy::Lenient => {
          warn!(input, operands = operands.len(), operators = operators.len(), "Operator count does not match operand count");
        }
      }
    }

    let mut operands = operands.into_iter();
    let mut acc = operands.next().unwrap_or_else(Expr::dimensionless);
    for (i, operand) in operands.enumerate() {
      match operators.get(i) {
        Some(op) => acc = op.apply(acc, operand),
        None => warn!(input, operand = %operand, "No operator for operand, skipping"),
      }
    }
    Ok(acc)
  }

  /// The dimension tag of a unit reference. Never fails; anything
  /// which does not resolve is [`DimensionTag::Zero`].
  pub fn classify(&self, input: &Value) -> DimensionTag {
    match self.resolve(input) {
      Ok(unit) => classify_unit(&unit),
      Err(err) => {
        trace!(%err, "Unresolvable unit classified as Zero");
        DimensionTag::Zero
      }
    }
  }

  fn classify_token(&self, token: &str) -> Result<Token, UnitError> {
    if let Some(op) = Operator::from_token(token) {
      debug!(token, ?op, "Classified token as operator");
      return Ok(Token::Operator(op));
    }
    if let Ok(n) = token.parse::<i64>() {
      debug!(token, "Classified token as integer");
      return Ok(Token::Operand(Expr::from(n)));
    }
    match self.registry.lookup(token) {
      Ok(unit) => {
        debug!(token, "Classified token as unit");
        Ok(Token::Operand(Expr::from(unit)))
      }
      Err(err) => Err(UnitError::UnknownUnit(err.name)),
    }
  }
}
