
use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A free symbol in an expression. Unlike a [`Unit`](crate::units::Unit),
/// a variable carries no physical dimension.
///
/// A variable's name must begin with a letter or underscore, followed
/// by zero or more letters, digits, underscores, or apostrophes. This
/// structure enforces these constraints.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(String);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid variable name '{original_string}'")]
pub struct TryFromStringError {
  original_string: String,
}

pub static VALID_NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[a-zA-Z_][a-zA-Z_0-9']*$").unwrap()
});

impl Var {
  pub fn new(name: impl Into<String>) -> Option<Self> {
    Self::try_from(name.into()).ok()
  }
}

impl TryFrom<String> for Var {
  type Error = TryFromStringError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    if VALID_NAME_RE.is_match(&name) {
      Ok(Self(name))
    } else {
      Err(TryFromStringError { original_string: name })
    }
  }
}

impl From<Var> for String {
  fn from(v: Var) -> Self {
    v.0
  }
}

impl Display for Var {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", &self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_variable_names() {
    Var::new("x").unwrap();
    Var::new("q999").unwrap();
    Var::new("AaAaAa").unwrap();
    Var::new("abc'").unwrap();
    Var::new("_tmp").unwrap();
    Var::new("snake_case_2").unwrap();
  }

  #[test]
  fn test_invalid_variable_names() {
    assert_eq!(Var::new(""), None);
    assert_eq!(Var::new("0a"), None);
    assert_eq!(Var::new("'"), None);
    assert_eq!(Var::new("a b"), None);
    assert_eq!(Var::new("c-d"), None);
    assert_eq!(Var::new("**"), None);
  }

  #[test]
  fn test_try_from_error_message() {
    let err = Var::try_from(String::from("9lives")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid variable name '9lives'");
  }
}
