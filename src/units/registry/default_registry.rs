
use super::table::TableRegistry;
use super::prefix::PrefixRegistry;
use crate::units::dimension::{Dimension, BaseDimension};
use crate::units::unit::Unit;

use num::One;
use num::pow::Pow;
use once_cell::sync::Lazy;

static DEFAULT_TABLE: Lazy<TableRegistry> = Lazy::new(build_default_units_table);

/// The default registry: every unit in [`default_units_table`], with
/// or without an SI prefix.
pub fn default_registry() -> PrefixRegistry<TableRegistry> {
  PrefixRegistry::new_si(default_units_table())
}

pub fn default_units_table() -> TableRegistry {
  DEFAULT_TABLE.clone()
}

fn build_default_units_table() -> TableRegistry {
  use BaseDimension::*;
  let units = vec![
    // Length units
    Unit::new("m", Length),
    Unit::new("in", Length),
    Unit::new("ft", Length),
    Unit::new("yd", Length),
    Unit::new("mi", Length),
    Unit::new("au", Length),
    Unit::new("lyr", Length),
    Unit::new("pc", Length), // Parsec
    Unit::new("nmi", Length), // Nautical mile
    Unit::new("Ang", Length), // Angstrom
    // Time units
    Unit::new("s", Time),
    Unit::new("sec", Time),
    Unit::new("min", Time),
    Unit::new("hr", Time),
    Unit::new("day", Time),
    Unit::new("wk", Time),
    Unit::new("yr", Time),
    // Mass units
    Unit::new("g", Mass),
    Unit::new("lb", Mass),
    Unit::new("oz", Mass),
    Unit::new("t", Mass), // Metric ton
    // Temperature units
    Unit::new("K", Temperature),
    Unit::new("degC", Temperature),
    Unit::new("degF", Temperature),
    // Electrical current units
    Unit::new("A", Current),
    // Luminous intensity units
    Unit::new("cd", LuminousIntensity),
    // Amount of substance units
    Unit::new("mol", AmountOfSubstance),
    // Angular units
    Unit::new("rad", Dimension::one()),
    Unit::new("deg", Dimension::one()),
    // Area units
    Unit::new("hect", Length.pow(2)), // Hectare
    Unit::new("acre", Length.pow(2)),
    Unit::new("b", Length.pow(2)), // Barn
    // Volume units
    Unit::new("L", Length.pow(3)), // Liter
    Unit::new("l", Length.pow(3)), // Liter (synonym)
    Unit::new("gal", Length.pow(3)), // US Gallon
    Unit::new("qt", Length.pow(3)),
    Unit::new("pt", Length.pow(3)),
    Unit::new("cup", Length.pow(3)),
    // Units with nontrivial dimension
    Unit::new("Hz", Time.pow(-1)), // Hertz
    Unit::new("mph", Length / Time),
    Unit::new("knot", Length / Time),
    Unit::new("c", Length / Time), // Speed of light
    Unit::new("N", Mass * Length / Time.pow(2)), // Newton
    Unit::new("J", Mass * Length.pow(2) / Time.pow(2)), // Joule
    Unit::new("W", Mass * Length.pow(2) / Time.pow(3)), // Watt
    Unit::new("Pa", Mass / Length / Time.pow(2)), // Pascal
  ];
  units.into_iter().collect()
}
