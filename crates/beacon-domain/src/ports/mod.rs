//! Ports
//!
//! Contracts the bootstrap consumes. Implementations live in
//! `beacon-providers` or in the application being bootstrapped.

pub mod application;
pub mod discovery;
pub mod events;
pub mod instance_config;
pub mod lifecycle;
pub mod properties;

pub use application::Application;
pub use discovery::{DiscoveryClient, InstanceInfoManager};
pub use events::{DiscoveryEvent, DiscoveryEventStream, EventBus};
pub use instance_config::InstanceConfig;
pub use lifecycle::LifecycleManaged;
pub use properties::PropertySource;
