
use approx::AbsDiffEq;
use num::{One, ToPrimitive};
use num::pow::Pow;

use std::fmt::{self, Display, Formatter};
use std::ops::{Mul, Neg};

/// Real number literal appearing in a symbolic expression.
///
/// Integers are kept exact for as long as arithmetic permits. Any
/// operation which would overflow an `i64`, or which produces a
/// non-integral result (such as a negative integer power), falls back
/// to an IEEE 754 float.
#[derive(Debug, Clone, Copy)]
pub enum Number {
  Integer(i64),
  Float(f64),
}

impl Number {
  pub fn to_f64(self) -> f64 {
    match self {
      Number::Integer(n) => n as f64,
      Number::Float(f) => f,
    }
  }

  /// Returns the number as an exact integer, if it is stored as one.
  /// Floats are never coerced, even when integral in value.
  pub fn as_integer(self) -> Option<i64> {
    match self {
      Number::Integer(n) => Some(n),
      Number::Float(_) => None,
    }
  }

  /// Raises a number to an integer power. The indeterminate form
  /// `0^0` is treated as 1.
  pub fn powi(self, exponent: i64) -> Number {
    match self {
      Number::Integer(n) if exponent >= 0 => {
        u32::try_from(exponent).ok()
          .and_then(|e| n.checked_pow(e))
          .map(Number::Integer)
          .unwrap_or_else(|| Number::Float((n as f64).powf(exponent as f64)))
      }
      _ => {
        let base = self.to_f64();
        let value = exponent.to_i32()
          .map(|e| base.powi(e))
          .unwrap_or_else(|| base.powf(exponent as f64));
        Number::Float(value)
      }
    }
  }
}

impl From<i64> for Number {
  fn from(n: i64) -> Self {
    Number::Integer(n)
  }
}

impl From<f64> for Number {
  fn from(f: f64) -> Self {
    Number::Float(f)
  }
}

impl PartialEq for Number {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Number::Integer(a), Number::Integer(b)) => a == b,
      (a, b) => a.to_f64() == b.to_f64(),
    }
  }
}

impl Mul for Number {
  type Output = Number;

  fn mul(self, other: Number) -> Number {
    match (self, other) {
      (Number::Integer(a), Number::Integer(b)) => {
        a.checked_mul(b)
          .map(Number::Integer)
          .unwrap_or_else(|| Number::Float(a as f64 * b as f64))
      }
      (a, b) => Number::Float(a.to_f64() * b.to_f64()),
    }
  }
}

impl Neg for Number {
  type Output = Number;

  fn neg(self) -> Number {
    self * Number::Integer(-1)
  }
}

impl Pow<i64> for Number {
  type Output = Number;

  fn pow(self, exponent: i64) -> Number {
    self.powi(exponent)
  }
}

impl One for Number {
  fn one() -> Self {
    Number::Integer(1)
  }
}

impl AbsDiffEq for Number {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    f64::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Number::Integer(n) => write!(f, "{n}"),
      Number::Float(x) => write!(f, "{x:?}"),
    }
  }
}
