//! Lookup of named units.
//!
//! A registry is only responsible for resolving simple unit names
//! such as `m` or `km`. Composite unit strings are folded together by
//! the [`Resolver`](crate::resolver::Resolver).

mod base;
mod default_registry;
mod prefix;
mod table;

pub use base::{UnitRegistry, EmptyRegistry, UnitLookupError};
pub use default_registry::{default_registry, default_units_table};
pub use prefix::PrefixRegistry;
pub use table::TableRegistry;
