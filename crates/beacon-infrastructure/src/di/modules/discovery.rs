//! Library default discovery module
//!
//! | Capability | Implementation | Depends on |
//! |------------|----------------|------------|
//! | `property-source` | environment variables | |
//! | `instance-config` | `cloud` provider | `property-source` |
//! | `instance-info` | `DefaultInstanceInfoManager` | `instance-config` |
//! | `discovery-client` | configured provider | `instance-config`, `instance-info`, `event-bus`? |
//!
//! The cloud instance config only works on a cloud host; deployments
//! elsewhere override it.

use super::ConfigurationModule;
use crate::constants::{DEFAULT_DISCOVERY_CLIENT, DEFAULT_LIBRARY_INSTANCE_CONFIG, DISCOVERY_MODULE};
use crate::di::discovery_lifecycle::DiscoveryLifecycle;
use beacon_application::registry::{
    DiscoveryClientContext, resolve_discovery_provider, resolve_instance_config_provider,
};
use beacon_domain::constants::{
    DISCOVERY_CLIENT, EVENT_BUS, INSTANCE_CONFIG, INSTANCE_INFO, PROPERTY_SOURCE,
};
use beacon_domain::error::Result;
use beacon_domain::ports::{EventBus, InstanceConfig, InstanceInfoManager, PropertySource};
use beacon_domain::value_objects::{BindingSet, Component, ImplementationDescriptor};
use beacon_providers::{DefaultInstanceInfoManager, EnvPropertySource};
use std::sync::Arc;

/// Default bindings for a discoverable service
#[derive(Debug, Clone)]
pub struct DiscoveryModule {
    instance_config: String,
    client: String,
}

impl DiscoveryModule {
    /// Cloud instance config with the in-memory discovery client
    pub fn new() -> Self {
        Self {
            instance_config: DEFAULT_LIBRARY_INSTANCE_CONFIG.to_string(),
            client: DEFAULT_DISCOVERY_CLIENT.to_string(),
        }
    }

    /// Use another discovery client provider
    #[must_use]
    pub fn with_client(mut self, provider: impl Into<String>) -> Self {
        self.client = provider.into();
        self
    }
}

impl Default for DiscoveryModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationModule for DiscoveryModule {
    fn name(&self) -> &str {
        DISCOVERY_MODULE
    }

    fn bindings(&self) -> Result<BindingSet> {
        BindingSet::builder(DISCOVERY_MODULE)
            .bind(
                PROPERTY_SOURCE,
                ImplementationDescriptor::new("EnvPropertySource", |_| {
                    let source: Arc<dyn PropertySource> = Arc::new(EnvPropertySource::new());
                    Ok(Component::new(source))
                }),
            )
            .bind(INSTANCE_CONFIG, instance_config_descriptor(&self.instance_config)?)
            .bind(
                INSTANCE_INFO,
                ImplementationDescriptor::new("DefaultInstanceInfoManager", |resolver| {
                    let config = resolver.get::<dyn InstanceConfig>(&INSTANCE_CONFIG)?;
                    let manager: Arc<dyn InstanceInfoManager> =
                        Arc::new(DefaultInstanceInfoManager::new(config.as_ref()));
                    Ok(Component::new(manager))
                })
                .depends_on(INSTANCE_CONFIG),
            )
            .bind(DISCOVERY_CLIENT, discovery_client_descriptor(&self.client)?)
            .build()
    }
}

/// Instance config built by the named registered provider
///
/// Fails right away when no provider has that name.
pub fn instance_config_descriptor(provider: &str) -> Result<ImplementationDescriptor> {
    let entry = resolve_instance_config_provider(provider)?;
    Ok(
        ImplementationDescriptor::new(format!("{}-instance-config", entry.name), move |resolver| {
            let properties = resolver.get::<dyn PropertySource>(&PROPERTY_SOURCE)?;
            let config = (entry.factory)(properties.as_ref())?;
            Ok(Component::new(config))
        })
        .depends_on(PROPERTY_SOURCE),
    )
}

/// Discovery client built by the named registered provider
///
/// The client is lifecycle-managed: init registers the instance, stop
/// deregisters it.
pub fn discovery_client_descriptor(provider: &str) -> Result<ImplementationDescriptor> {
    let entry = resolve_discovery_provider(provider)?;
    Ok(
        ImplementationDescriptor::new(format!("{}-discovery-client", entry.name), move |resolver| {
            let context = DiscoveryClientContext {
                config: resolver.get::<dyn InstanceConfig>(&INSTANCE_CONFIG)?,
                info: resolver.get::<dyn InstanceInfoManager>(&INSTANCE_INFO)?,
                events: resolver.get_optional::<dyn EventBus>(&EVENT_BUS)?,
            };
            let client = (entry.factory)(context)?;
            let hook = Arc::new(DiscoveryLifecycle::new(Arc::clone(&client)));
            Ok(Component::new(client).with_lifecycle(hook))
        })
        .depends_on(INSTANCE_CONFIG)
        .depends_on(INSTANCE_INFO)
        .optionally_depends_on(EVENT_BUS),
    )
}
