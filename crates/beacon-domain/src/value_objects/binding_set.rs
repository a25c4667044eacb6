//! Ordered binding sets contributed by configuration modules

use crate::error::{Error, Result};
use crate::value_objects::{Binding, Capability, Component, ImplementationDescriptor, Scope};
use std::collections::HashMap;

/// Ordered, immutable set of bindings from one module
///
/// Each capability appears at most once. Iteration follows declaration
/// order, which is also the tie-break order for dependency sorting.
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    module: String,
    bindings: Vec<Binding>,
    index: HashMap<Capability, usize>,
}

impl BindingSet {
    /// Start declaring bindings for `module`
    pub fn builder(module: impl Into<String>) -> BindingSetBuilder {
        BindingSetBuilder::new(module)
    }

    /// Build a set from bindings where a later entry for a capability
    /// replaces the earlier one in the earlier one's position
    pub fn from_bindings(module: impl Into<String>, bindings: impl IntoIterator<Item = Binding>) -> Self {
        let mut set = Self {
            module: module.into(),
            ..Self::default()
        };
        for binding in bindings {
            match set.index.get(binding.capability()) {
                Some(&position) => set.bindings[position] = binding,
                None => {
                    set.index
                        .insert(binding.capability().clone(), set.bindings.len());
                    set.bindings.push(binding);
                }
            }
        }
        set
    }

    /// Name of the module that produced the set
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Binding for `capability`
    pub fn get(&self, capability: &Capability) -> Option<&Binding> {
        self.index.get(capability).map(|&i| &self.bindings[i])
    }

    /// Binding at `position` in declaration order
    pub fn binding_at(&self, position: usize) -> Option<&Binding> {
        self.bindings.get(position)
    }

    /// Whether `capability` is bound
    pub fn contains(&self, capability: &Capability) -> bool {
        self.index.contains_key(capability)
    }

    /// Position of `capability` in declaration order
    pub fn position(&self, capability: &Capability) -> Option<usize> {
        self.index.get(capability).copied()
    }

    /// Bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Bound capabilities in declaration order
    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.bindings.iter().map(Binding::capability)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the set has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<'a> IntoIterator for &'a BindingSet {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

/// Builder for a module's binding set
///
/// Declaring a capability twice is an error reported by [`build`](Self::build);
/// overriding belongs to composition, not to a single module.
#[derive(Debug)]
pub struct BindingSetBuilder {
    module: String,
    bindings: Vec<Binding>,
    duplicate: Option<Capability>,
}

impl BindingSetBuilder {
    /// Create an empty builder
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            bindings: Vec::new(),
            duplicate: None,
        }
    }

    /// Add a binding
    #[must_use]
    pub fn add(mut self, binding: Binding) -> Self {
        if self.duplicate.is_none()
            && self
                .bindings
                .iter()
                .any(|b| b.capability() == binding.capability())
        {
            self.duplicate = Some(binding.capability().clone());
        }
        self.bindings.push(binding);
        self
    }

    /// Bind `capability` as a singleton
    #[must_use]
    pub fn bind(self, capability: impl Into<Capability>, descriptor: ImplementationDescriptor) -> Self {
        self.add(Binding::new(capability, descriptor, Scope::Singleton))
    }

    /// Bind `capability` with a fresh instance per resolution
    #[must_use]
    pub fn bind_transient(
        self,
        capability: impl Into<Capability>,
        descriptor: ImplementationDescriptor,
    ) -> Self {
        self.add(Binding::new(capability, descriptor, Scope::Transient))
    }

    /// Bind `capability` to an existing instance
    #[must_use]
    pub fn bind_instance(
        self,
        capability: impl Into<Capability>,
        name: impl Into<String>,
        component: Component,
    ) -> Self {
        self.bind(capability, ImplementationDescriptor::instance(name, component))
    }

    /// Finish the set
    pub fn build(self) -> Result<BindingSet> {
        if let Some(capability) = self.duplicate {
            return Err(Error::duplicate_binding(&capability, self.module));
        }
        Ok(BindingSet::from_bindings(self.module, self.bindings))
    }
}
