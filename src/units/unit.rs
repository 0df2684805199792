
use super::dimension::Dimension;

use num::One;

use std::fmt::{self, Formatter, Display};

/// Name under which the dimensionless identity unit is displayed.
pub const DIMENSIONLESS_NAME: &str = "dimensionless";

/// A unit is a named quantity in some [`Dimension`].
///
/// Units carry no conversion factor. Two units are equal exactly when
/// their names and dimensions agree, so `m` and `km` are distinct
/// units of the same dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit {
  name: String,
  dimension: Dimension,
}

impl Unit {
  pub fn new(name: impl Into<String>, dimension: impl Into<Dimension>) -> Self {
    Self {
      name: name.into(),
      dimension: dimension.into(),
    }
  }

  /// The identity for unit multiplication. Its dimension is
  /// [`Dimension::one`].
  pub fn dimensionless() -> Self {
    Self::new(DIMENSIONLESS_NAME, Dimension::one())
  }

  pub fn is_dimensionless(&self) -> bool {
    self.name == DIMENSIONLESS_NAME && self.dimension.is_one()
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn dimension(&self) -> &Dimension {
    &self.dimension
  }

  /// Produces a new unit whose name is derived from this one, in the
  /// same dimension.
  pub fn renamed<F>(&self, name_fn: F) -> Self
  where F: FnOnce(&str) -> String {
    Self {
      name: name_fn(&self.name),
      dimension: self.dimension.clone(),
    }
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}
