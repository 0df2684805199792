
use itertools::Itertools;
use num::One;
use num::pow::Pow;

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

/// A dimension is a formal product and quotient of zero or more
/// [`BaseDimension`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
  dims: [i64; NDIMS],
}

/// The seven SI base dimensions. Every unit represents a formal
/// product or quotient of zero or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Length,
  Time,
  Mass,
  Temperature,
  Current,
  LuminousIntensity,
  AmountOfSubstance,
}

pub const NDIMS: usize = 7;

impl Dimension {
  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims = [0; NDIMS];
    dims[base.dimension_index()] = 1;
    Self { dims }
  }

  /// The nonzero components of this dimension, in SI order.
  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i64)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter().copied())
      .filter(|(_, x)| *x != 0)
  }

  /// Returns the power `n` such that `base.pow(n) == self`, or `None`
  /// if no integer power exists. Always `None` when `base` is
  /// dimensionless.
  pub fn ilog(&self, base: &Self) -> Option<i64> {
    if base.is_one() {
      return None;
    }
    let mut power = None;
    for (&have, &unit) in self.dims.iter().zip(&base.dims) {
      if unit == 0 {
        if have != 0 {
          return None;
        }
        continue;
      }
      if have % unit != 0 {
        return None;
      }
      let candidate = have / unit;
      match power {
        None => power = Some(candidate),
        Some(p) if p == candidate => {}
        Some(_) => return None,
      }
    }
    power
  }

  /// If this dimension is a pure power of length (`length ** n`),
  /// returns `n`.
  pub fn length_power(&self) -> Option<i64> {
    self.ilog(&Dimension::singleton(BaseDimension::Length))
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Mass,
    BaseDimension::Temperature,
    BaseDimension::Current,
    BaseDimension::LuminousIntensity,
    BaseDimension::AmountOfSubstance,
  ];

  fn dimension_index(self) -> usize {
    self as usize
  }
}

impl From<BaseDimension> for Dimension {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl Pow<i64> for &Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension {
      dims: self.dims.map(|x| x * power),
    }
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    (&Dimension::singleton(self)).pow(power)
  }
}

impl Mul for Dimension {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    let mut dims = self.dims;
    for (lhs, rhs) in dims.iter_mut().zip(rhs.dims) {
      *lhs += rhs;
    }
    Dimension { dims }
  }
}

impl Div for Dimension {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    self * (&rhs).pow(-1)
  }
}

impl Mul for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) * Dimension::singleton(rhs)
  }
}

impl Mul<Dimension> for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) * rhs
  }
}

impl Div for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) / Dimension::singleton(rhs)
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self { dims: [0; NDIMS] }
  }

  fn is_one(&self) -> bool {
    self.dims.iter().all(|x| *x == 0)
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::LuminousIntensity => write!(f, "intensity"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.is_one() {
      return write!(f, "1");
    }
    let rendered = self.components()
      .map(|(dim, power)| {
        if power == 1 {
          dim.to_string()
        } else {
          format!("{dim} ** {power}")
        }
      })
      .join(" * ");
    write!(f, "{rendered}")
  }
}
