//! Instance Config Provider Registry
//!
//! Instance configuration providers register here and are looked up by the
//! name configured under `discovery.instance_config`.

use std::sync::Arc;

use beacon_domain::error::Result;
use beacon_domain::ports::{InstanceConfig, PropertySource};

/// Registry entry for instance config providers
pub struct InstanceConfigProviderEntry {
    /// Unique provider name (e.g., "cloud", "datacenter")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory reading the provider's properties
    pub factory: fn(&dyn PropertySource) -> Result<Arc<dyn InstanceConfig>>,
}

#[linkme::distributed_slice]
pub static INSTANCE_CONFIG_PROVIDERS: [InstanceConfigProviderEntry] = [..];

/// Find the instance config provider registered as `name`
pub fn resolve_instance_config_provider(
    name: &str,
) -> Result<&'static InstanceConfigProviderEntry> {
    INSTANCE_CONFIG_PROVIDERS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| {
            let available: Vec<&str> = INSTANCE_CONFIG_PROVIDERS.iter().map(|e| e.name).collect();
            super::unknown_provider("instance config", name, &available)
        })
}

/// List all registered instance config providers as (name, description)
pub fn list_instance_config_providers() -> Vec<(&'static str, &'static str)> {
    INSTANCE_CONFIG_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
