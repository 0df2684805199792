
use super::base::{UnitRegistry, UnitLookupError};
use crate::units::prefix::MetricPrefix;
use crate::units::unit::Unit;

use std::collections::HashMap;

/// Registry which accepts any name known to the inner registry,
/// optionally preceded by a single metric prefix. Exact names always
/// win over prefixed readings.
#[derive(Debug, Clone)]
pub struct PrefixRegistry<R> {
  inner: R,
  prefixes: HashMap<String, MetricPrefix>,
  longest_prefix_len: usize,
}

impl<R> PrefixRegistry<R> {
  pub fn new(inner: R, prefixes: impl IntoIterator<Item = MetricPrefix>) -> Self {
    let prefixes: HashMap<_, _> = prefixes.into_iter().map(|p| (p.prefix_name.clone(), p)).collect();
    let longest_prefix_len = prefixes.keys().map(|s| s.len()).max().unwrap_or(0);
    Self { inner, prefixes, longest_prefix_len }
  }

  /// A `PrefixRegistry` over `inner` which accepts the standard SI
  /// prefixes, as per [`MetricPrefix::si_prefixes`].
  pub fn new_si(inner: R) -> Self {
    Self::new(inner, MetricPrefix::si_prefixes())
  }
}

impl<R> UnitRegistry for PrefixRegistry<R>
where R: UnitRegistry {
  fn lookup(&self, name: &str) -> Result<Unit, UnitLookupError> {
    self.inner.lookup(name).or_else(|err| {
      for i in 1..=self.longest_prefix_len.min(name.len()) {
        if !name.is_char_boundary(i) {
          continue;
        }
        let (prefix, rest) = name.split_at(i);
        if let Some(prefix) = self.prefixes.get(prefix) {
          if let Ok(unit) = self.inner.lookup(rest) {
            return Ok(prefix.apply(&unit));
          }
        }
      }
      Err(err)
    })
  }
}
