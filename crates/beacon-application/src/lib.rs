//! # Beacon Application Layer
//!
//! Name-keyed registries of provider implementations. Providers submit
//! entries into `linkme` distributed slices at link time; deployment
//! overrides pick one by the name found in configuration.

pub mod registry;

pub use registry::{
    list_discovery_providers, list_instance_config_providers, resolve_discovery_provider,
    resolve_instance_config_provider, DiscoveryClientContext, DiscoveryProviderEntry,
    InstanceConfigProviderEntry, DISCOVERY_PROVIDERS, INSTANCE_CONFIG_PROVIDERS,
};
