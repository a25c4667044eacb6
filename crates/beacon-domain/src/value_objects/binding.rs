//! Bindings from capabilities to implementations

use crate::error::Result;
use crate::value_objects::{Capability, Component, Resolver};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Instance scope of a binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Scope {
    /// One instance for the process lifetime, owned by the instance registry
    #[default]
    Singleton,
    /// A fresh instance for every resolution; never lifecycle-managed
    Transient,
}

/// Factory producing a component from its resolved dependencies
pub type ComponentFactory = Arc<dyn Fn(&dyn Resolver) -> Result<Component> + Send + Sync>;

/// Describes how to construct the implementation behind a capability
#[derive(Clone)]
pub struct ImplementationDescriptor {
    name: String,
    dependencies: Vec<Capability>,
    optional_dependencies: Vec<Capability>,
    factory: ComponentFactory,
}

impl ImplementationDescriptor {
    /// Describe an implementation built by `factory`
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&dyn Resolver) -> Result<Component> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            optional_dependencies: Vec::new(),
            factory: Arc::new(factory),
        }
    }

    /// Describe an already constructed instance
    pub fn instance(name: impl Into<String>, component: Component) -> Self {
        Self::new(name, move |_| Ok(component.clone()))
    }

    /// Declare a required dependency
    #[must_use]
    pub fn depends_on(mut self, capability: impl Into<Capability>) -> Self {
        self.dependencies.push(capability.into());
        self
    }

    /// Declare a dependency that is injected only when bound
    #[must_use]
    pub fn optionally_depends_on(mut self, capability: impl Into<Capability>) -> Self {
        self.optional_dependencies.push(capability.into());
        self
    }

    /// Implementation name, used in logs and error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required dependencies in declaration order
    pub fn dependencies(&self) -> &[Capability] {
        &self.dependencies
    }

    /// Optional dependencies in declaration order
    pub fn optional_dependencies(&self) -> &[Capability] {
        &self.optional_dependencies
    }

    /// Whether `capability` is declared, required or optional
    pub fn declares(&self, capability: &Capability) -> bool {
        self.dependencies.contains(capability) || self.optional_dependencies.contains(capability)
    }

    /// Run the factory
    pub fn construct(&self, resolver: &dyn Resolver) -> Result<Component> {
        (self.factory)(resolver)
    }
}

impl fmt::Debug for ImplementationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationDescriptor")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .field("optional_dependencies", &self.optional_dependencies)
            .finish_non_exhaustive()
    }
}

/// One capability-to-implementation declaration
#[derive(Debug, Clone)]
pub struct Binding {
    capability: Capability,
    descriptor: ImplementationDescriptor,
    scope: Scope,
}

impl Binding {
    /// Create a binding
    pub fn new(capability: impl Into<Capability>, descriptor: ImplementationDescriptor, scope: Scope) -> Self {
        Self {
            capability: capability.into(),
            descriptor,
            scope,
        }
    }

    /// Bound capability
    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// Implementation descriptor
    pub fn descriptor(&self) -> &ImplementationDescriptor {
        &self.descriptor
    }

    /// Instance scope
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Implementation name
    pub fn implementation(&self) -> &str {
        self.descriptor.name()
    }
}
