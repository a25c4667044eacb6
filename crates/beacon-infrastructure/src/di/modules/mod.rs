//! Configuration modules
//!
//! A module contributes one binding set. The bootstrap composes them:
//!
//! ```text
//! DiscoveryModule (library defaults)
//! └── DeploymentOverrideModule (rebinds PropertySource, InstanceConfig, ...)
//! ```

pub mod discovery;
pub mod overrides;

pub use discovery::{DiscoveryModule, discovery_client_descriptor, instance_config_descriptor};
pub use overrides::DeploymentOverrideModule;

use beacon_domain::error::Result;
use beacon_domain::value_objects::BindingSet;

/// A source of bindings
pub trait ConfigurationModule {
    /// Module name, reported in binding errors
    fn name(&self) -> &str;

    /// Declare the module's bindings
    fn bindings(&self) -> Result<BindingSet>;
}
