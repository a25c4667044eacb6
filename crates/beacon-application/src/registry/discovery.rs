//! Discovery Client Provider Registry
//!
//! Discovery clients register here and are looked up by the name configured
//! under `discovery.client`.

use std::sync::Arc;

use beacon_domain::error::Result;
use beacon_domain::ports::{DiscoveryClient, EventBus, InstanceConfig, InstanceInfoManager};

/// Resolved dependencies handed to a discovery client factory
#[derive(Clone)]
pub struct DiscoveryClientContext {
    /// Lease timings and identity
    pub config: Arc<dyn InstanceConfig>,
    /// Instance info to publish
    pub info: Arc<dyn InstanceInfoManager>,
    /// Optional event bus for registration events
    pub events: Option<Arc<dyn EventBus>>,
}

/// Registry entry for discovery client providers
pub struct DiscoveryProviderEntry {
    /// Unique provider name (e.g., "in-memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory creating the client
    pub factory: fn(DiscoveryClientContext) -> Result<Arc<dyn DiscoveryClient>>,
}

#[linkme::distributed_slice]
pub static DISCOVERY_PROVIDERS: [DiscoveryProviderEntry] = [..];

/// Find the discovery provider registered as `name`
pub fn resolve_discovery_provider(name: &str) -> Result<&'static DiscoveryProviderEntry> {
    DISCOVERY_PROVIDERS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| {
            let available: Vec<&str> = DISCOVERY_PROVIDERS.iter().map(|e| e.name).collect();
            super::unknown_provider("discovery", name, &available)
        })
}

/// List all registered discovery providers as (name, description)
pub fn list_discovery_providers() -> Vec<(&'static str, &'static str)> {
    DISCOVERY_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
