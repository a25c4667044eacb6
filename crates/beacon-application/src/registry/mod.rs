//! Provider Registry System
//!
//! | Registry | Slice | Produces |
//! |----------|-------|----------|
//! | [`instance_config`] | [`INSTANCE_CONFIG_PROVIDERS`] | `Arc<dyn InstanceConfig>` |
//! | [`discovery`] | [`DISCOVERY_PROVIDERS`] | `Arc<dyn DiscoveryClient>` |

pub mod discovery;
pub mod instance_config;

pub use discovery::{
    list_discovery_providers, resolve_discovery_provider, DiscoveryClientContext,
    DiscoveryProviderEntry, DISCOVERY_PROVIDERS,
};
pub use instance_config::{
    list_instance_config_providers, resolve_instance_config_provider,
    InstanceConfigProviderEntry, INSTANCE_CONFIG_PROVIDERS,
};

use beacon_domain::error::Error;

fn unknown_provider(kind: &str, name: &str, available: &[&str]) -> Error {
    Error::configuration(format!(
        "Unknown {kind} provider '{name}'. Available providers: {available:?}"
    ))
}
