//! # Beacon Domain
//!
//! Core types for bootstrapping a discovery-registered service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy for binding, build, lifecycle and runtime failures |
//! | [`value_objects`] | Capabilities, bindings, binding sets, components, lifecycle state |
//! | [`ports`] | Contracts consumed by the bootstrap (application, lifecycle hooks, discovery) |
//! | [`constants`] | Well-known capabilities shared by modules and providers |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    Binding, BindingSet, BindingSetBuilder, Capability, Component, ImplementationDescriptor,
    LifecycleState, Resolver, Scope,
};
