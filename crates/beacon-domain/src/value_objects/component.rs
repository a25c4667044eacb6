//! Type-erased component instances and dependency resolution

use crate::error::{Error, Result};
use crate::ports::lifecycle::LifecycleManaged;
use crate::value_objects::Capability;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A constructed instance satisfying one capability
///
/// The instance is stored as `Arc<T>` behind `dyn Any`, so `T` can be a
/// trait object (`Arc<dyn InstanceConfig>`) and callers must look it up with
/// the same `T` it was registered with.
#[derive(Clone)]
pub struct Component {
    instance: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
    lifecycle: Option<Arc<dyn LifecycleManaged>>,
}

impl Component {
    /// Wrap an instance exposed as `Arc<T>`
    pub fn new<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> Self {
        let instance: Arc<dyn Any + Send + Sync> = Arc::new(instance);
        Self {
            instance,
            type_name: std::any::type_name::<T>(),
            lifecycle: None,
        }
    }

    /// Attach lifecycle hooks invoked by the lifecycle manager
    #[must_use]
    pub fn with_lifecycle(mut self, hook: Arc<dyn LifecycleManaged>) -> Self {
        self.lifecycle = Some(hook);
        self
    }

    /// Lifecycle hooks, if the component has any
    pub fn lifecycle(&self) -> Option<&Arc<dyn LifecycleManaged>> {
        self.lifecycle.as_ref()
    }

    /// Name of the type the component was registered as
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Get the instance as `Arc<T>`
    pub fn downcast<T: ?Sized + Send + Sync + 'static>(
        &self,
        capability: &Capability,
    ) -> Result<Arc<T>> {
        (*self.instance)
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| Error::ComponentType {
                capability: capability.clone(),
                expected: std::any::type_name::<T>(),
            })
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("type", &self.type_name)
            .field("managed", &self.lifecycle.is_some())
            .finish()
    }
}

/// Dependency access handed to component factories
///
/// A resolver is scoped to the component being constructed and only hands
/// out capabilities that component declared.
pub trait Resolver {
    /// The component being constructed
    fn requester(&self) -> &Capability;

    /// Resolve a declared dependency
    ///
    /// Returns `Ok(None)` for an optional dependency that is not bound.
    fn resolve_component(&self, capability: &Capability) -> Result<Option<Component>>;
}

impl dyn Resolver + '_ {
    /// Resolve a required dependency as `Arc<T>`
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self, capability: &Capability) -> Result<Arc<T>> {
        let component = self
            .resolve_component(capability)?
            .ok_or_else(|| Error::missing_binding(capability, self.requester().as_str()))?;
        component.downcast::<T>(capability)
    }

    /// Resolve an optional dependency as `Arc<T>`
    pub fn get_optional<T: ?Sized + Send + Sync + 'static>(
        &self,
        capability: &Capability,
    ) -> Result<Option<Arc<T>>> {
        match self.resolve_component(capability)? {
            Some(component) => component.downcast::<T>(capability).map(Some),
            None => Ok(None),
        }
    }
}
