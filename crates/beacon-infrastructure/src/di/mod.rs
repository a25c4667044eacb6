//! Component container
//!
//! Capability-keyed dependency injection: modules declare binding sets, the
//! composer merges them with last-writer-wins overrides, and the instance
//! registry validates the merged graph before constructing singletons in
//! dependency order.

pub mod composer;
pub mod container;
pub mod discovery_lifecycle;
pub mod graph;
pub mod modules;

pub use composer::{combine, compose};
pub use container::{InstanceRegistry, ManagedComponent, ResolutionContext};
pub use discovery_lifecycle::DiscoveryLifecycle;
pub use graph::{GraphNode, dependency_order};
pub use modules::{ConfigurationModule, DeploymentOverrideModule, DiscoveryModule};
