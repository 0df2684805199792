
//! Units, their physical dimensions, and registries mapping unit
//! names to units.

pub mod dimension;
pub mod prefix;
pub mod registry;
pub mod unit;

pub use dimension::{Dimension, BaseDimension};
pub use unit::Unit;
