//! Value objects
//!
//! Immutable data that flows through composition, graph build and lifecycle.

pub mod binding;
pub mod binding_set;
pub mod capability;
pub mod component;
pub mod instance;
pub mod lifecycle;

pub use binding::{Binding, ComponentFactory, ImplementationDescriptor, Scope};
pub use binding_set::{BindingSet, BindingSetBuilder};
pub use capability::Capability;
pub use component::{Component, Resolver};
pub use instance::{DataCenterKind, InstanceInfo, InstanceStatus};
pub use lifecycle::LifecycleState;
