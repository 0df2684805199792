
use super::base::{UnitRegistry, UnitLookupError};
use crate::units::unit::Unit;

use std::collections::HashMap;

/// A [`UnitRegistry`] which looks up the given name in a
/// pre-determined hash table. Later entries replace earlier entries
/// of the same name.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
  pub table: HashMap<String, Unit>,
}

impl TableRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, unit: Unit) -> Option<Unit> {
    self.table.insert(unit.name().to_owned(), unit)
  }

  pub fn len(&self) -> usize {
    self.table.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.is_empty()
  }
}

impl UnitRegistry for TableRegistry {
  fn lookup(&self, name: &str) -> Result<Unit, UnitLookupError> {
    self.table.get(name)
      .cloned()
      .ok_or_else(|| UnitLookupError::new(name))
  }
}

impl FromIterator<Unit> for TableRegistry {
  fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
    let table = iter.into_iter()
      .map(|unit| (unit.name().to_owned(), unit))
      .collect();
    Self { table }
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;
  use crate::units::dimension::BaseDimension;

  pub fn sample_table() -> TableRegistry {
    vec![
      Unit::new("m", BaseDimension::Length),
      Unit::new("s", BaseDimension::Time),
      Unit::new("min", BaseDimension::Time),
      Unit::new("g", BaseDimension::Mass),
    ].into_iter().collect()
  }
}
