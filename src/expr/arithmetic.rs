
//! Canonicalizing arithmetic on [`Expr`].
//!
//! Products are flattened, numeric factors are merged into a single
//! leading coefficient, and integer powers of equal bases are
//! combined. The remaining factors are sorted by their printed form
//! (ties broken by structure), so multiplication commutes structurally: `m * s ** -2` and
//! `s ** -2 * m` are the same expression. Division is multiplication
//! by a reciprocal power, and subtraction is addition of a negated
//! term.

use super::{Expr, PRODUCT, POWER, SUM};
use super::atom::Atom;
use super::number::Number;

use itertools::Itertools;
use num::pow::Pow;

use std::ops::{Add, Sub, Mul, Div, Neg};

impl Expr {
  /// The canonical product of the given factors.
  ///
  /// The dimensionless identity unit is absorbed by any other unit
  /// factor. If every unit factor cancels (or only the identity was
  /// present), a numeric coefficient is kept alongside the identity
  /// unit, so that `5 * dimensionless` remains a value-times-unit
  /// product rather than collapsing to a bare number.
  pub fn product(factors: impl IntoIterator<Item = Expr>) -> Expr {
    let mut coefficient: Option<Number> = None;
    let mut saw_unit = false;
    let mut powers: Vec<(Expr, i64)> = Vec::new();
    for factor in flatten(factors, PRODUCT) {
      match factor {
        Expr::Atom(Atom::Number(n)) => {
          coefficient = Some(coefficient.map_or(n, |c| c * n));
        }
        factor => {
          saw_unit = true;
          if !factor.is_dimensionless() {
            merge_power(&mut powers, factor.into_base_and_exponent());
          }
        }
      }
    }

    let factors: Vec<Expr> = powers.into_iter()
      .filter(|(_, exponent)| *exponent != 0)
      .sorted_by_cached_key(|(base, exponent)| (base.to_string(), format!("{base:?}"), *exponent))
      .map(|(base, exponent)| raise(base, exponent))
      .collect();

    match (coefficient, factors.is_empty()) {
      (None, true) if saw_unit => Expr::dimensionless(),
      (None, true) => Expr::from(1),
      (Some(c), true) if saw_unit => Expr::call(PRODUCT, vec![Expr::from(c), Expr::dimensionless()]),
      (Some(c), true) => Expr::from(c),
      (Some(Number::Integer(1)) | None, false) => {
        if factors.len() == 1 {
          factors.into_iter().next().unwrap_or_else(Expr::dimensionless)
        } else {
          Expr::call(PRODUCT, factors)
        }
      }
      (Some(c), false) => {
        let mut args = Vec::with_capacity(factors.len() + 1);
        args.push(Expr::from(c));
        args.extend(factors);
        Expr::call(PRODUCT, args)
      }
    }
  }

  /// The canonical power `base ** exponent`.
  ///
  /// Integer exponents distribute over products and compose with
  /// existing integer powers. Non-integer exponents are kept as an
  /// unevaluated power node.
  pub fn power(base: Expr, exponent: Expr) -> Expr {
    if base.is_dimensionless() {
      return base;
    }
    let Some(n) = exponent.as_integer() else {
      return Expr::call(POWER, vec![base, exponent]);
    };
    match base {
      Expr::Atom(Atom::Number(x)) => Expr::from(x.powi(n)),
      _ if n == 0 => Expr::dimensionless(),
      Expr::Call(name, args) if name == PRODUCT => {
        Expr::product(args.into_iter().map(|factor| Expr::power(factor, Expr::from(n))))
      }
      base => {
        let (inner, k) = base.into_base_and_exponent();
        match k.checked_mul(n) {
          Some(total) => raise(inner, total),
          None => Expr::call(POWER, vec![raise(inner, k), Expr::from(n)]),
        }
      }
    }
  }

  /// The flattened sum of the given terms. Sums are not otherwise
  /// simplified.
  pub fn sum(terms: impl IntoIterator<Item = Expr>) -> Expr {
    let mut terms = flatten(terms, SUM);
    match terms.len() {
      0 => Expr::from(0),
      1 => terms.remove(0),
      _ => Expr::call(SUM, terms),
    }
  }

  /// Splits `b ** n` (for integer `n`) into `(b, n)`. Any other
  /// expression is its own base, with exponent 1.
  fn into_base_and_exponent(self) -> (Expr, i64) {
    if let Some(n) = self.as_power().and_then(|(_, exponent)| exponent.as_integer()) {
      if let Expr::Call(_, mut args) = self {
        let base = args.swap_remove(0);
        return (base, n);
      }
    }
    (self, 1)
  }
}

/// Adds `base ** exponent` into the first entry with an equal base.
/// Bases are compared structurally, not by their printed form. If the
/// combined exponent would overflow, the power is kept as a separate
/// entry.
fn merge_power(powers: &mut Vec<(Expr, i64)>, (base, exponent): (Expr, i64)) {
  let existing = powers.iter_mut()
    .find_map(|(b, e)| if *b == base { e.checked_add(exponent).map(|sum| (e, sum)) } else { None });
  match existing {
    Some((e, sum)) => *e = sum,
    None => powers.push((base, exponent)),
  }
}

/// Builds a power node from an already-canonical base, without
/// further simplification.
fn raise(base: Expr, exponent: i64) -> Expr {
  if exponent == 1 {
    base
  } else {
    Expr::call(POWER, vec![base, Expr::from(exponent)])
  }
}

fn flatten(exprs: impl IntoIterator<Item = Expr>, function_name: &str) -> Vec<Expr> {
  let mut output = Vec::new();
  for expr in exprs {
    push_flattened(expr, function_name, &mut output);
  }
  output
}

fn push_flattened(expr: Expr, function_name: &str, output: &mut Vec<Expr>) {
  match expr {
    Expr::Call(name, args) if name == function_name => {
      for arg in args {
        push_flattened(arg, function_name, output);
      }
    }
    expr => output.push(expr),
  }
}

impl Mul for Expr {
  type Output = Expr;

  fn mul(self, rhs: Expr) -> Expr {
    Expr::product([self, rhs])
  }
}

impl Div for Expr {
  type Output = Expr;

  fn div(self, rhs: Expr) -> Expr {
    Expr::product([self, Expr::power(rhs, Expr::from(-1))])
  }
}

impl Add for Expr {
  type Output = Expr;

  fn add(self, rhs: Expr) -> Expr {
    Expr::sum([self, rhs])
  }
}

impl Sub for Expr {
  type Output = Expr;

  fn sub(self, rhs: Expr) -> Expr {
    Expr::sum([self, -rhs])
  }
}

impl Neg for Expr {
  type Output = Expr;

  fn neg(self) -> Expr {
    Expr::product([Expr::from(-1), self])
  }
}

impl Pow<Expr> for Expr {
  type Output = Expr;

  fn pow(self, exponent: Expr) -> Expr {
    Expr::power(self, exponent)
  }
}

impl Pow<i64> for Expr {
  type Output = Expr;

  fn pow(self, exponent: i64) -> Expr {
    Expr::power(self, Expr::from(exponent))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::Unit;
  use crate::units::dimension::BaseDimension;

  fn meter() -> Expr {
    Expr::from(Unit::new("m", BaseDimension::Length))
  }

  fn second() -> Expr {
    Expr::from(Unit::new("s", BaseDimension::Time))
  }

  fn var(name: &str) -> Expr {
    Expr::var(name).unwrap()
  }

  #[test]
  fn test_product_commutes() {
    assert_eq!(meter() * second(), second() * meter());
    assert_eq!(
      meter() * second().pow(-2),
      second().pow(-2) * meter(),
    );
  }

  #[test]
  fn test_product_puts_coefficient_first() {
    let expr = meter() * Expr::from(5.0);
    assert_eq!(expr, Expr::call(PRODUCT, vec![Expr::from(5.0), meter()]));
  }

  #[test]
  fn test_product_merges_coefficients() {
    let expr = Expr::from(2) * meter() * Expr::from(3);
    assert_eq!(expr, Expr::call(PRODUCT, vec![Expr::from(6), meter()]));
  }

  #[test]
  fn test_product_drops_integer_one() {
    assert_eq!(Expr::from(1) * meter(), meter());
    // A float coefficient of one is kept, as it records inexactness.
    assert_eq!(
      Expr::from(1.0) * meter(),
      Expr::call(PRODUCT, vec![Expr::from(1.0), meter()]),
    );
  }

  #[test]
  fn test_product_combines_powers() {
    assert_eq!(meter() * meter(), Expr::call(POWER, vec![meter(), Expr::from(2)]));
    assert_eq!(meter() * meter().pow(2), meter().pow(3));
    assert_eq!(meter() * meter().pow(-1), Expr::dimensionless());
  }

  #[test]
  fn test_product_exponent_overflow_keeps_factors_apart() {
    let big = meter().pow(i64::MAX);
    let expr = big.clone() * meter();
    assert_eq!(expr, Expr::call(PRODUCT, vec![meter(), big.clone()]));
    assert_eq!(meter() * big.clone(), expr);
    assert_eq!(expr / meter(), big);
  }

  #[test]
  fn test_product_with_same_named_atoms_commutes() {
    let unit = Expr::from(Unit::new("x", BaseDimension::Length));
    let other_unit = Expr::from(Unit::new("x", BaseDimension::Time));
    let expected = Expr::call(PRODUCT, vec![
      Expr::call(POWER, vec![unit.clone(), Expr::from(2)]),
      var("x"),
    ]);
    assert_eq!(unit.clone() * var("x") * unit.clone(), expected);
    assert_eq!(unit.clone() * unit.clone() * var("x"), expected);
    assert_eq!(var("x") * unit.clone() * unit.clone(), expected);

    let mixed = unit.clone() * other_unit.clone() * unit.clone();
    assert_eq!(mixed, unit.clone().pow(2) * other_unit.clone());
    assert_eq!(mixed, other_unit * unit.clone() * unit);
    assert_eq!(mixed.args().len(), 2);
  }

  #[test]
  fn test_product_with_dimensionless() {
    assert_eq!(meter() * Expr::dimensionless(), meter());
    assert_eq!(
      Expr::from(5) * Expr::dimensionless(),
      Expr::call(PRODUCT, vec![Expr::from(5), Expr::dimensionless()]),
    );
    assert_eq!(
      Expr::from(5) * meter() / meter(),
      Expr::call(PRODUCT, vec![Expr::from(5), Expr::dimensionless()]),
    );
  }

  #[test]
  fn test_product_of_numbers() {
    assert_eq!(Expr::from(2) * Expr::from(3), Expr::from(6));
    assert_eq!(Expr::product([]), Expr::from(1));
  }

  #[test]
  fn test_division() {
    assert_eq!(
      meter() / second(),
      Expr::call(PRODUCT, vec![meter(), Expr::call(POWER, vec![second(), Expr::from(-1)])]),
    );
    assert_eq!(meter() / second().pow(2), meter() * second().pow(-2));
  }

  #[test]
  fn test_power_identities() {
    assert_eq!(meter().pow(1), meter());
    assert_eq!(meter().pow(0), Expr::dimensionless());
    assert_eq!(Expr::dimensionless().pow(3), Expr::dimensionless());
    assert_eq!(meter().pow(2).pow(3), meter().pow(6));
    assert_eq!(Expr::from(2).pow(10), Expr::from(1024));
  }

  #[test]
  fn test_power_distributes_over_product() {
    let expr = (Expr::from(3) * meter() / second()).pow(2);
    assert_eq!(
      expr,
      Expr::call(PRODUCT, vec![
        Expr::from(9),
        Expr::call(POWER, vec![meter(), Expr::from(2)]),
        Expr::call(POWER, vec![second(), Expr::from(-2)]),
      ]),
    );
  }

  #[test]
  fn test_power_with_float_exponent_is_kept() {
    let expr = meter().pow(Expr::from(0.5));
    assert_eq!(expr, Expr::call(POWER, vec![meter(), Expr::from(0.5)]));
    // Not merged with integer powers of the same base.
    assert_eq!((expr.clone() * meter()).args().len(), 2);
  }

  #[test]
  fn test_sum_and_difference() {
    assert_eq!(
      meter() + second() + var("x"),
      Expr::call(SUM, vec![meter(), second(), var("x")]),
    );
    assert_eq!(
      meter() - second(),
      Expr::call(SUM, vec![meter(), Expr::call(PRODUCT, vec![Expr::from(-1), second()])]),
    );
    assert_eq!(Expr::sum([meter()]), meter());
  }

  #[test]
  fn test_negation() {
    assert_eq!(-Expr::from(4), Expr::from(-4));
    assert_eq!(-(-meter()), meter());
  }

  #[test]
  fn test_display_of_canonical_forms() {
    assert_eq!((meter() / second().pow(2)).to_string(), "m * s ** -2");
    assert_eq!((Expr::from(5.0) * meter()).to_string(), "5.0 * m");
    assert_eq!((Expr::from(5) * Expr::dimensionless()).to_string(), "5 * dimensionless");
  }
}
