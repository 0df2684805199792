
//! Resolution, decomposition, and dimensional classification of
//! physical units.
//!
//! [`resolver::Resolver`] turns unit descriptions such as
//! `"m / s ** 2"` into symbolic [`expr::Expr`] values,
//! [`decompose::decompose`] splits quantities like `5.0 * m` into a
//! magnitude and a unit, and [`classify::classify_unit`] reports
//! whether a unit is a length, an area, or a volume.

pub mod classify;
pub mod decompose;
pub mod error;
pub mod expr;
pub mod resolver;
pub mod units;
pub mod util;
pub mod value;

pub use error::Error;
