
//! Error types for unit resolution, decomposition, and configuration.

use crate::expr::{Expr, ExprKind};

use thiserror::Error;

/// Failure to resolve a unit description into a unit expression.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum UnitError {
  #[error("Unknown unit '{0}'")]
  UnknownUnit(String),
  #[error("Cannot interpret {0} as a unit")]
  UnrecognizedInput(String),
  #[error("Unit string '{0}' contains no operands")]
  NoOperands(String),
  #[error("Unit string '{input}' has {operands} operand(s) but {operators} operator(s)")]
  ArityMismatch {
    input: String,
    operands: usize,
    operators: usize,
  },
}

/// The expression (or value) is not in `value * unit` or
/// `unit ** exponent` form.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum TypeMismatchError {
  #[error("Expected a product or a power, got {kind} expression '{expr}'")]
  UnexpectedExpr {
    kind: ExprKind,
    expr: Expr,
  },
  #[error("Expected an expression or an array of expressions, got {0}")]
  UnexpectedInput(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("units for all values must be equal (expected '{expected}', found '{found}' at index {index:?})")]
pub struct NonUniformUnitError {
  pub expected: Expr,
  pub found: Expr,
  pub index: Vec<usize>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecomposeError {
  #[error("{0}")]
  TypeMismatch(#[from] TypeMismatchError),
  #[error("{0}")]
  NonUniform(#[from] NonUniformUnitError),
}

#[derive(Debug, Error)]
#[error("Invalid resolver configuration: {0}")]
pub struct ConfigError(#[from] pub serde_json::Error);

/// Any error produced by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  UnitError(#[from] UnitError),
  #[error("{0}")]
  DecomposeError(#[from] DecomposeError),
  #[error("{0}")]
  ConfigError(#[from] ConfigError),
}

impl From<TypeMismatchError> for Error {
  fn from(err: TypeMismatchError) -> Self {
    Self::DecomposeError(err.into())
  }
}

impl From<NonUniformUnitError> for Error {
  fn from(err: NonUniformUnitError) -> Self {
    Self::DecomposeError(err.into())
  }
}
