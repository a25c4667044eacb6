//! Capability-keyed instance registry
//!
//! Built once from a merged binding set:
//!
//! ```text
//! BindingSet ──▶ validate required deps ──▶ dependency_order ──▶ construct singletons
//!                   MissingBinding            CyclicDependency     ComponentConstruction
//! ```
//!
//! No factory runs until the whole graph is known to be complete and
//! acyclic. After the build the registry is read-only.

use crate::constants::REGISTRY_LOOKUP;
use crate::di::graph::{GraphNode, dependency_order};
use beacon_domain::error::{Error, Result};
use beacon_domain::ports::LifecycleManaged;
use beacon_domain::value_objects::{Binding, BindingSet, Capability, Component, Resolver, Scope};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A constructed singleton as seen by the lifecycle manager
#[derive(Clone)]
pub struct ManagedComponent {
    /// Capability the component satisfies
    pub capability: Capability,
    /// Singletons that must be started first
    ///
    /// Transient dependencies are replaced by the singletons they depend on.
    pub dependencies: Vec<Capability>,
    /// Lifecycle hooks, if the component has any
    pub hook: Option<Arc<dyn LifecycleManaged>>,
}

impl std::fmt::Debug for ManagedComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedComponent")
            .field("capability", &self.capability)
            .field("dependencies", &self.dependencies)
            .field("has_hook", &self.hook.is_some())
            .finish()
    }
}

/// Registry of constructed components
#[derive(Debug)]
pub struct InstanceRegistry {
    bindings: BindingSet,
    singletons: HashMap<Capability, Component>,
    managed: Vec<ManagedComponent>,
}

impl InstanceRegistry {
    /// Validate `bindings` and construct every singleton
    pub fn build(bindings: &BindingSet) -> Result<Self> {
        validate_required(bindings)?;

        let nodes: Vec<GraphNode> = bindings
            .iter()
            .map(|binding| GraphNode::new(binding.capability().clone(), bound_dependencies(binding, bindings)))
            .collect();
        let order = dependency_order(&nodes)?;

        let bindings = bindings.clone();
        let mut singletons = HashMap::new();
        let mut managed = Vec::new();

        for index in order {
            let Some(binding) = bindings.binding_at(index) else {
                return Err(Error::internal(format!("binding index {index} out of range")));
            };
            if binding.scope() == Scope::Transient {
                continue;
            }

            let component = construct(binding, &bindings, &singletons)?;
            debug!(
                capability = %binding.capability(),
                implementation = binding.implementation(),
                managed = component.lifecycle().is_some(),
                "Component constructed"
            );

            managed.push(ManagedComponent {
                capability: binding.capability().clone(),
                dependencies: singleton_dependencies(binding, &bindings),
                hook: component.lifecycle().cloned(),
            });
            singletons.insert(binding.capability().clone(), component);
        }

        info!(
            module = bindings.module(),
            bindings = bindings.len(),
            singletons = singletons.len(),
            "Instance registry built"
        );

        Ok(Self {
            bindings,
            singletons,
            managed,
        })
    }

    /// Look up `capability` as `Arc<T>`
    ///
    /// `T` must be the exact type the component was registered with, which
    /// is usually a trait object such as `dyn DiscoveryClient`. Transient
    /// bindings yield a fresh instance per call.
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self, capability: &Capability) -> Result<Arc<T>> {
        self.component(capability)?.downcast::<T>(capability)
    }

    /// Look up the type-erased component behind `capability`
    pub fn component(&self, capability: &Capability) -> Result<Component> {
        if let Some(component) = self.singletons.get(capability) {
            return Ok(component.clone());
        }
        match self.bindings.get(capability) {
            Some(binding) if binding.scope() == Scope::Transient => {
                construct(binding, &self.bindings, &self.singletons)
            }
            _ => Err(Error::missing_binding(capability, REGISTRY_LOOKUP)),
        }
    }

    /// Whether `capability` is bound
    pub fn contains(&self, capability: &Capability) -> bool {
        self.bindings.contains(capability)
    }

    /// Singletons in construction order, for lifecycle registration
    pub fn managed_components(&self) -> &[ManagedComponent] {
        &self.managed
    }

    /// The merged binding set the registry was built from
    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }
}

fn validate_required(bindings: &BindingSet) -> Result<()> {
    for binding in bindings {
        for dependency in binding.descriptor().dependencies() {
            if !bindings.contains(dependency) {
                return Err(Error::missing_binding(dependency, binding.capability().as_str()));
            }
        }
    }
    Ok(())
}

/// Required dependencies plus the optional ones that are bound
fn bound_dependencies(binding: &Binding, bindings: &BindingSet) -> Vec<Capability> {
    let descriptor = binding.descriptor();
    descriptor
        .dependencies()
        .iter()
        .chain(
            descriptor
                .optional_dependencies()
                .iter()
                .filter(|capability| bindings.contains(capability)),
        )
        .cloned()
        .collect()
}

/// Bound dependencies with transients collapsed to their own singleton dependencies
fn singleton_dependencies(binding: &Binding, bindings: &BindingSet) -> Vec<Capability> {
    let mut collected = Vec::new();
    let mut stack: Vec<Capability> = bound_dependencies(binding, bindings);
    stack.reverse();
    while let Some(capability) = stack.pop() {
        let Some(dependency) = bindings.get(&capability) else {
            continue;
        };
        match dependency.scope() {
            Scope::Singleton => {
                if !collected.contains(&capability) {
                    collected.push(capability);
                }
            }
            Scope::Transient => {
                let mut nested = bound_dependencies(dependency, bindings);
                nested.reverse();
                stack.extend(nested);
            }
        }
    }
    collected
}

fn construct(
    binding: &Binding,
    bindings: &BindingSet,
    singletons: &HashMap<Capability, Component>,
) -> Result<Component> {
    let context = ResolutionContext {
        binding,
        bindings,
        singletons,
    };
    binding
        .descriptor()
        .construct(&context)
        .map_err(|e| match e {
            e @ (Error::UndeclaredDependency { .. } | Error::ComponentConstruction { .. }) => e,
            other => Error::construction(binding.capability(), other),
        })
}

/// Dependency access for one factory call
///
/// Hands out only the dependencies the component declared. Singletons come
/// from the registry under construction; transients are built on the spot.
pub struct ResolutionContext<'a> {
    binding: &'a Binding,
    bindings: &'a BindingSet,
    singletons: &'a HashMap<Capability, Component>,
}

impl Resolver for ResolutionContext<'_> {
    fn requester(&self) -> &Capability {
        self.binding.capability()
    }

    fn resolve_component(&self, capability: &Capability) -> Result<Option<Component>> {
        if !self.binding.descriptor().declares(capability) {
            return Err(Error::UndeclaredDependency {
                capability: capability.clone(),
                requested_by: self.binding.capability().clone(),
            });
        }

        let Some(dependency) = self.bindings.get(capability) else {
            return Ok(None);
        };
        match dependency.scope() {
            Scope::Singleton => self
                .singletons
                .get(capability)
                .cloned()
                .map(Some)
                .ok_or_else(|| {
                    Error::internal(format!(
                        "{} resolved {} before it was constructed",
                        self.binding.capability(),
                        capability
                    ))
                }),
            Scope::Transient => {
                let component = construct(dependency, self.bindings, self.singletons)?;
                if component.lifecycle().is_some() {
                    warn!(
                        capability = %capability,
                        "Lifecycle hooks on a transient component are ignored"
                    );
                }
                Ok(Some(component))
            }
        }
    }
}
