
//! Immutable symbolic expressions over numbers, units, and free
//! variables.
//!
//! Every arithmetic operation produces a new expression in canonical
//! form (see [`arithmetic`]), so structurally equal expressions are
//! algebraically equal for the unit algebra supported here.

pub mod arithmetic;
pub mod atom;
pub mod number;
pub mod var;

use atom::Atom;
use number::Number;
use var::Var;
use crate::units::Unit;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// Function name of a product node.
pub const PRODUCT: &str = "*";
/// Function name of a power node. Power nodes always have exactly two
/// arguments: the base and the exponent.
pub const POWER: &str = "**";
/// Function name of a sum node.
pub const SUM: &str = "+";

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Atom(Atom),
  Call(String, Vec<Expr>),
}

/// The shape of an expression's outermost node, as far as unit
/// decomposition is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
  Power,
  Product,
  Other,
}

impl Expr {
  /// Convenience constructor for [`Expr::Call`].
  pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Call(name.to_string(), args)
  }

  /// A free variable, or `None` if the name is not a valid variable
  /// name.
  pub fn var(name: &str) -> Option<Expr> {
    Var::new(name).map(|v| Expr::Atom(Atom::Var(v)))
  }

  /// The dimensionless identity unit.
  pub fn dimensionless() -> Expr {
    Expr::from(Unit::dimensionless())
  }

  pub fn is_dimensionless(&self) -> bool {
    self.as_unit().is_some_and(Unit::is_dimensionless)
  }

  pub fn kind(&self) -> ExprKind {
    match self {
      Expr::Call(name, args) if name == POWER && args.len() == 2 => ExprKind::Power,
      Expr::Call(name, _) if name == PRODUCT => ExprKind::Product,
      _ => ExprKind::Other,
    }
  }

  /// The ordered operands of this node. Atoms have no operands.
  pub fn args(&self) -> &[Expr] {
    match self {
      Expr::Atom(_) => &[],
      Expr::Call(_, args) => args,
    }
  }

  pub fn as_number(&self) -> Option<Number> {
    match self {
      Expr::Atom(Atom::Number(n)) => Some(*n),
      _ => None,
    }
  }

  pub fn to_f64(&self) -> Option<f64> {
    self.as_number().map(Number::to_f64)
  }

  pub fn as_integer(&self) -> Option<i64> {
    self.as_number().and_then(Number::as_integer)
  }

  /// If this expression is a single named unit, returns it.
  pub fn as_unit(&self) -> Option<&Unit> {
    match self {
      Expr::Atom(Atom::Unit(u)) => Some(u),
      _ => None,
    }
  }

  /// Splits a power node into its base and exponent.
  pub fn as_power(&self) -> Option<(&Expr, &Expr)> {
    match (self.kind(), self.args()) {
      (ExprKind::Power, [base, exponent]) => Some((base, exponent)),
      _ => None,
    }
  }

  fn is_negative_number(&self) -> bool {
    self.to_f64().is_some_and(|x| x < 0.0)
  }
}

impl From<Atom> for Expr {
  fn from(a: Atom) -> Expr {
    Expr::Atom(a)
  }
}

impl From<Number> for Expr {
  fn from(n: Number) -> Expr {
    Expr::Atom(Atom::Number(n))
  }
}

impl From<Unit> for Expr {
  fn from(u: Unit) -> Expr {
    Expr::Atom(Atom::Unit(u))
  }
}

impl From<Var> for Expr {
  fn from(v: Var) -> Expr {
    Expr::Atom(Atom::Var(v))
  }
}

impl From<i64> for Expr {
  fn from(n: i64) -> Expr {
    Expr::from(Number::from(n))
  }
}

impl From<f64> for Expr {
  fn from(n: f64) -> Expr {
    Expr::from(Number::from(n))
  }
}

impl Display for ExprKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ExprKind::Power => write!(f, "Pow"),
      ExprKind::Product => write!(f, "Mul"),
      ExprKind::Other => write!(f, "Other"),
    }
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if let Some((base, exponent)) = self.as_power() {
      if matches!(base, Expr::Call(_, _)) || base.is_negative_number() {
        write!(f, "({base})")?;
      } else {
        write!(f, "{base}")?;
      }
      return if matches!(exponent, Expr::Call(_, _)) {
        write!(f, " ** ({exponent})")
      } else {
        write!(f, " ** {exponent}")
      };
    }
    match self {
      Expr::Atom(a) => write!(f, "{a}"),
      Expr::Call(name, args) if name == PRODUCT => {
        let factors = args.iter()
          .map(|arg| match arg {
            Expr::Call(name, _) if name == SUM => format!("({arg})"),
            _ => arg.to_string(),
          })
          .join(" * ");
        write!(f, "{factors}")
      }
      Expr::Call(name, args) if name == SUM => {
        write!(f, "{}", args.iter().join(" + "))
      }
      Expr::Call(name, args) => {
        write!(f, "{name}({})", args.iter().join(", "))
      }
    }
  }
}
