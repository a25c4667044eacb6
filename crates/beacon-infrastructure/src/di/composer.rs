//! Override composition of binding sets
//!
//! A deployment customizes the library defaults by listing override modules
//! after the base module. For every capability the binding from the last
//! module declaring it wins; it keeps the base position, and capabilities an
//! override introduces are appended in first-seen order.

use beacon_domain::error::{Error, Result};
use beacon_domain::value_objects::{BindingSet, Capability};
use std::collections::HashMap;
use tracing::debug;

/// Merge `overrides` over `base`, last writer wins
///
/// Pure: neither input is modified, and equal inputs give equal outputs.
/// Dependencies are not checked here; an unresolved one surfaces when the
/// merged set is built.
pub fn compose(base: &BindingSet, overrides: &[BindingSet]) -> BindingSet {
    let mut current: HashMap<&Capability, &str> = base
        .iter()
        .map(|b| (b.capability(), b.implementation()))
        .collect();
    for set in overrides {
        for binding in set {
            if let Some(previous) = current.insert(binding.capability(), binding.implementation()) {
                debug!(
                    capability = %binding.capability(),
                    replaced = previous,
                    by = binding.implementation(),
                    module = set.module(),
                    "Binding overridden"
                );
            }
        }
    }

    let merged = base
        .iter()
        .chain(overrides.iter().flat_map(BindingSet::iter))
        .cloned();
    BindingSet::from_bindings(base.module(), merged)
}

/// Merge modules that must not overlap
///
/// A capability bound by two of the sets is a [`Error::DuplicateBinding`]
/// naming the second module.
pub fn combine(sets: &[BindingSet]) -> Result<BindingSet> {
    let mut owners: HashMap<&Capability, &str> = HashMap::new();
    for set in sets {
        for capability in set.capabilities() {
            if let Some(owner) = owners.insert(capability, set.module()) {
                debug!(capability = %capability, first = owner, second = set.module(), "Modules overlap");
                return Err(Error::duplicate_binding(capability, set.module()));
            }
        }
    }

    let name = sets
        .iter()
        .map(BindingSet::module)
        .collect::<Vec<_>>()
        .join("+");
    Ok(BindingSet::from_bindings(
        name,
        sets.iter().flat_map(BindingSet::iter).cloned(),
    ))
}
