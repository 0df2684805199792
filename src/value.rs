
//! Dynamically-typed input to the resolver and the decomposer.

use crate::expr::Expr;
use crate::units::Unit;
use crate::util::tensor::Tensor;

/// A unit reference or a quantity, as handed to this crate by a
/// caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
  #[default]
  None,
  Integer(i64),
  Float(f64),
  Text(String),
  Expr(Expr),
  Array(Tensor<Expr>),
}

impl Value {
  /// Short name of the variant, for error messages.
  pub fn kind_name(&self) -> &'static str {
    match self {
      Value::None => "none",
      Value::Integer(_) => "integer",
      Value::Float(_) => "float",
      Value::Text(_) => "text",
      Value::Expr(_) => "expression",
      Value::Array(_) => "array",
    }
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::Text(s.to_owned())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::Text(s)
  }
}

impl From<i64> for Value {
  fn from(n: i64) -> Self {
    Value::Integer(n)
  }
}

impl From<f64> for Value {
  fn from(n: f64) -> Self {
    Value::Float(n)
  }
}

impl From<Expr> for Value {
  fn from(expr: Expr) -> Self {
    Value::Expr(expr)
  }
}

impl From<Unit> for Value {
  fn from(unit: Unit) -> Self {
    Value::Expr(Expr::from(unit))
  }
}

impl From<Tensor<Expr>> for Value {
  fn from(array: Tensor<Expr>) -> Self {
    Value::Array(array)
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Self {
    value.map_or(Value::None, Into::into)
  }
}
