
//! Splitting quantities into a numeric magnitude and a unit.
//!
//! A quantity is expected in one of two normal forms: `value * unit`
//! (a product whose first factor is numeric) or `unit ** exponent`.

use crate::error::{TypeMismatchError, NonUniformUnitError, DecomposeError};
use crate::expr::{Expr, ExprKind};
use crate::util::tensor::Tensor;
use crate::value::Value;

use tracing::trace;

use std::ops::Mul;

#[derive(Debug, Clone, PartialEq)]
pub struct Decomposed {
  pub magnitude: f64,
  pub unit: Expr,
}

/// Magnitudes of an array of quantities which all share one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct DecomposedArray {
  pub magnitudes: Tensor<f64>,
  pub unit: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecomposedValue {
  Scalar(Decomposed),
  Array(DecomposedArray),
}

impl Decomposed {
  pub fn new(magnitude: f64, unit: Expr) -> Self {
    Self { magnitude, unit }
  }
}

/// Decomposes a single quantity.
///
/// A power is entirely unit, with magnitude 1. A product whose first
/// factor is numeric splits into that number and the product of the
/// remaining factors. A product led by anything else (such as a free
/// variable) is again entirely unit. Any other expression is an
/// error.
pub fn decompose(expr: &Expr) -> Result<Decomposed, TypeMismatchError> {
  match expr.kind() {
    ExprKind::Power => Ok(Decomposed::new(1.0, expr.clone())),
    ExprKind::Product => {
      let Some((first, rest)) = expr.args().split_first() else {
        return Ok(Decomposed::new(1.0, expr.clone()));
      };
      match first.to_f64() {
        Some(magnitude) => Ok(Decomposed::new(magnitude, product_of(rest))),
        None => Ok(Decomposed::new(1.0, expr.clone())),
      }
    }
    kind @ ExprKind::Other => {
      Err(TypeMismatchError::UnexpectedExpr { kind, expr: expr.clone() })
    }
  }
}

/// Decomposes every element of an array, requiring that all elements
/// have the same unit.
///
/// An empty array has unit `dimensionless`.
pub fn decompose_array(values: &Tensor<Expr>) -> Result<DecomposedArray, DecomposeError> {
  let decomposed = values.try_map_ref(decompose)?;
  trace!(shape = ?decomposed.shape(), "Decomposed array elements");

  let unit = decomposed.as_flat().first()
    .map_or_else(Expr::dimensionless, |first| first.unit.clone());
  if let Some((index, element)) = decomposed.indexed_iter().find(|(_, element)| element.unit != unit) {
    return Err(NonUniformUnitError {
      expected: unit,
      found: element.unit.clone(),
      index,
    }.into());
  }

  Ok(DecomposedArray {
    magnitudes: decomposed.map(|element| element.magnitude),
    unit,
  })
}

/// Decomposes a scalar expression or an array of expressions.
pub fn decompose_any(value: &Value) -> Result<DecomposedValue, DecomposeError> {
  match value {
    Value::Expr(expr) => Ok(DecomposedValue::Scalar(decompose(expr)?)),
    Value::Array(values) => Ok(DecomposedValue::Array(decompose_array(values)?)),
    value => Err(TypeMismatchError::UnexpectedInput(value.kind_name().to_owned()).into()),
  }
}

fn product_of(factors: &[Expr]) -> Expr {
  match factors {
    [] => Expr::dimensionless(),
    [factor] => factor.clone(),
    factors => factors.iter().cloned().reduce(Mul::mul).unwrap_or_else(Expr::dimensionless),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolver::Resolver;
  use crate::units::{Unit, BaseDimension};

  use approx::assert_abs_diff_eq;
  use num::pow::Pow;

  fn meter() -> Expr {
    Expr::from(Unit::new("m", BaseDimension::Length))
  }

  fn second() -> Expr {
    Expr::from(Unit::new("s", BaseDimension::Time))
  }

  #[test]
  fn test_value_times_unit() {
    let result = decompose(&(Expr::from(5.0) * meter())).unwrap();
    assert_abs_diff_eq!(result.magnitude, 5.0);
    assert_eq!(result.unit, meter());
  }

  #[test]
  fn test_value_times_compound_unit() {
    let result = decompose(&(Expr::from(-3) * meter() / second().pow(2))).unwrap();
    assert_abs_diff_eq!(result.magnitude, -3.0);
    assert_eq!(result.unit, meter() * second().pow(-2));
  }

  #[test]
  fn test_power_is_never_split() {
    let result = decompose(&meter().pow(2)).unwrap();
    assert_abs_diff_eq!(result.magnitude, 1.0);
    assert_eq!(result.unit, meter().pow(2));
  }

  #[test]
  fn test_symbolic_leading_factor() {
    let expr = Expr::var("x").unwrap() * meter();
    let result = decompose(&expr).unwrap();
    assert_abs_diff_eq!(result.magnitude, 1.0);
    assert_eq!(result.unit, expr);
  }

  #[test]
  fn test_identity_times_number() {
    let resolver = Resolver::with_defaults();
    let identity = resolver.resolve(&Value::None).unwrap();
    let result = decompose(&(Expr::from(5) * identity)).unwrap();
    assert_abs_diff_eq!(result.magnitude, 5.0);
    assert_eq!(result.unit, Expr::dimensionless());
  }

  #[test]
  fn test_other_expressions_are_rejected() {
    let sum = meter() + second();
    assert_eq!(
      decompose(&sum),
      Err(TypeMismatchError::UnexpectedExpr { kind: ExprKind::Other, expr: sum }),
    );
    decompose(&meter()).unwrap_err();
    decompose(&Expr::from(5.0)).unwrap_err();
  }

  #[test]
  fn test_uniform_array() {
    let q = Expr::from(3.0) * meter();
    let values = Tensor::from_rows(vec![vec![q.clone(), q.clone()], vec![q.clone(), q]]).unwrap();
    let result = decompose_array(&values).unwrap();
    assert_eq!(result.unit, meter());
    assert_eq!(result.magnitudes.shape(), &[2, 2]);
    for magnitude in result.magnitudes.iter() {
      assert_abs_diff_eq!(*magnitude, 3.0);
    }
  }

  #[test]
  fn test_non_uniform_array() {
    let q = Expr::from(3.0) * meter();
    let odd = Expr::from(2.0) * second();
    let values = Tensor::from_rows(vec![vec![q.clone(), q.clone()], vec![odd, q]]).unwrap();
    let err = decompose_array(&values).unwrap_err();
    assert_eq!(err, DecomposeError::NonUniform(NonUniformUnitError {
      expected: meter(),
      found: second(),
      index: vec![1, 0],
    }));
  }

  #[test]
  fn test_array_with_bad_element() {
    let values = Tensor::vector(vec![Expr::from(1.0) * meter(), meter() + second()]);
    let err = decompose_array(&values).unwrap_err();
    assert!(matches!(err, DecomposeError::TypeMismatch(_)));
  }

  #[test]
  fn test_empty_array() {
    let values = Tensor::<Expr>::vector(vec![]);
    let result = decompose_array(&values).unwrap();
    assert!(result.magnitudes.is_empty());
    assert_eq!(result.magnitudes.shape(), &[0]);
    assert_eq!(result.unit, Expr::dimensionless());
  }

  #[test]
  fn test_decompose_any() {
    let q = Expr::from(2.5) * second();
    let scalar = decompose_any(&Value::from(q.clone())).unwrap();
    assert_eq!(scalar, DecomposedValue::Scalar(Decomposed::new(2.5, second())));

    let array = decompose_any(&Value::from(Tensor::vector(vec![q.clone(), q]))).unwrap();
    let DecomposedValue::Array(array) = array else { panic!("Expected array, got {array:?}") };
    assert_eq!(array.magnitudes.as_flat(), &[2.5, 2.5]);
    assert_eq!(array.unit, second());

    assert_eq!(
      decompose_any(&Value::from("m")),
      Err(DecomposeError::TypeMismatch(TypeMismatchError::UnexpectedInput(String::from("text")))),
    );
  }
}
