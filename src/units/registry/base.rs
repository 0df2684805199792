
use crate::units::Unit;

use thiserror::Error;

/// A read-only mapping from unit names to [`Unit`] values.
pub trait UnitRegistry {
  /// Looks up the unit with exactly the given name, or produces an
  /// error if no such unit is known.
  fn lookup(&self, name: &str) -> Result<Unit, UnitLookupError>;
}

/// Registry which knows no units. Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No unit named '{name}'")]
pub struct UnitLookupError {
  pub name: String,
}

impl UnitLookupError {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

impl UnitRegistry for EmptyRegistry {
  fn lookup(&self, name: &str) -> Result<Unit, UnitLookupError> {
    Err(UnitLookupError::new(name))
  }
}

impl<'a, R> UnitRegistry for &'a R
where R: UnitRegistry + ?Sized {
  fn lookup(&self, name: &str) -> Result<Unit, UnitLookupError> {
    (**self).lookup(name)
  }
}

impl<R> UnitRegistry for Box<R>
where R: UnitRegistry + ?Sized {
  fn lookup(&self, name: &str) -> Result<Unit, UnitLookupError> {
    (**self).lookup(name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_registry() {
    assert_eq!(EmptyRegistry.lookup("m"), Err(UnitLookupError::new("m")));
    assert!(EmptyRegistry.lookup("").is_err());
  }

  #[test]
  fn test_registry_through_reference_and_box() {
    let boxed: Box<dyn UnitRegistry> = Box::new(EmptyRegistry);
    assert!((&boxed).lookup("s").is_err());
    assert_eq!(
      boxed.lookup("s").unwrap_err().to_string(),
      "No unit named 's'",
    );
  }
}
