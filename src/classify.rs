
//! Coarse classification of units by physical dimension.

use crate::expr::Expr;
use crate::units::{Dimension, BaseDimension};

use num::One;

use std::fmt::{self, Display, Formatter};

/// The closed set of dimension tags reported for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionTag {
  /// No dimension, or one which is not tracked here.
  Zero,
  /// Dimensionless by identity. Only produced by
  /// [`DimensionTag::from_dimension`]; classification remaps it to
  /// `Zero`.
  One,
  Length,
  Area,
  Volume,
}

impl DimensionTag {
  /// The tag of a dimension, if it is dimensionless or a power of
  /// length from one to three.
  pub fn from_dimension(dimension: &Dimension) -> DimensionTag {
    if dimension.is_one() {
      return DimensionTag::One;
    }
    match dimension.length_power() {
      Some(n) => DimensionTag::from_length_power(n),
      None => DimensionTag::Zero,
    }
  }

  pub fn from_length_power(n: i64) -> DimensionTag {
    match n {
      1 => DimensionTag::Length,
      2 => DimensionTag::Area,
      3 => DimensionTag::Volume,
      _ => DimensionTag::Zero,
    }
  }

  /// Collapses `One` into `Zero`.
  pub fn normalized(self) -> DimensionTag {
    match self {
      DimensionTag::One => DimensionTag::Zero,
      tag => tag,
    }
  }
}

impl Display for DimensionTag {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      DimensionTag::Zero => write!(f, "Zero"),
      DimensionTag::One => write!(f, "One"),
      DimensionTag::Length => write!(f, "length"),
      DimensionTag::Area => write!(f, "area"),
      DimensionTag::Volume => write!(f, "volume"),
    }
  }
}

/// Classifies an already-resolved unit expression. Total: anything
/// that cannot be classified is [`DimensionTag::Zero`].
///
/// A single unit reports its own dimension. A power of a length unit
/// is an area or a volume when the exponent is 2 or 3. Every other
/// shape of expression, including products, is `Zero`.
pub fn classify_unit(unit: &Expr) -> DimensionTag {
  if let Some(unit) = unit.as_unit() {
    return DimensionTag::from_dimension(unit.dimension()).normalized();
  }
  let Some((base, exponent)) = unit.as_power() else {
    return DimensionTag::Zero;
  };
  let is_length = base.as_unit()
    .is_some_and(|base| base.dimension() == &Dimension::singleton(BaseDimension::Length));
  match exponent.as_integer() {
    Some(n) if is_length => match n {
      2 => DimensionTag::Area,
      3 => DimensionTag::Volume,
      _ => DimensionTag::Zero,
    },
    _ => DimensionTag::Zero,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::Unit;
  use crate::units::registry::{UnitRegistry, default_registry};

  use num::pow::Pow;

  fn unit(name: &str) -> Expr {
    Expr::from(default_registry().lookup(name).unwrap())
  }

  #[test]
  fn test_powers_of_length() {
    assert_eq!(classify_unit(&unit("m").pow(2)), DimensionTag::Area);
    assert_eq!(classify_unit(&unit("m").pow(3)), DimensionTag::Volume);
    assert_eq!(classify_unit(&unit("m").pow(4)), DimensionTag::Zero);
    assert_eq!(classify_unit(&unit("m").pow(-2)), DimensionTag::Zero);
    assert_eq!(classify_unit(&unit("km").pow(2)), DimensionTag::Area);
  }

  #[test]
  fn test_powers_of_other_dimensions() {
    assert_eq!(classify_unit(&unit("s").pow(2)), DimensionTag::Zero);
    assert_eq!(classify_unit(&unit("hect").pow(2)), DimensionTag::Zero);
    assert_eq!(classify_unit(&Expr::var("x").unwrap().pow(2)), DimensionTag::Zero);
    // Non-integer exponents are never classified.
    assert_eq!(classify_unit(&unit("m").pow(Expr::from(2.0))), DimensionTag::Zero);
  }

  #[test]
  fn test_single_units() {
    assert_eq!(classify_unit(&unit("m")), DimensionTag::Length);
    assert_eq!(classify_unit(&unit("acre")), DimensionTag::Area);
    assert_eq!(classify_unit(&unit("L")), DimensionTag::Volume);
    assert_eq!(classify_unit(&unit("s")), DimensionTag::Zero);
    assert_eq!(classify_unit(&unit("rad")), DimensionTag::Zero);
    assert_eq!(classify_unit(&Expr::dimensionless()), DimensionTag::Zero);
  }

  #[test]
  fn test_other_expressions() {
    assert_eq!(classify_unit(&(unit("m") * unit("s"))), DimensionTag::Zero);
    assert_eq!(classify_unit(&Expr::from(2)), DimensionTag::Zero);
    assert_eq!(classify_unit(&Expr::var("x").unwrap()), DimensionTag::Zero);
  }

  #[test]
  fn test_from_dimension() {
    let meter = Unit::new("m", BaseDimension::Length);
    assert_eq!(DimensionTag::from_dimension(meter.dimension()), DimensionTag::Length);
    assert_eq!(DimensionTag::from_dimension(&Dimension::one()), DimensionTag::One);
    assert_eq!(DimensionTag::One.normalized(), DimensionTag::Zero);
    assert_eq!(DimensionTag::Area.normalized(), DimensionTag::Area);
  }

  #[test]
  fn test_display() {
    assert_eq!(DimensionTag::Zero.to_string(), "Zero");
    assert_eq!(DimensionTag::Volume.to_string(), "volume");
  }
}
