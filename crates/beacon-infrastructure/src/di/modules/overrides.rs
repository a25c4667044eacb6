//! Deployment override module
//!
//! Listed after [`DiscoveryModule`](super::DiscoveryModule). It rebinds:
//!
//! - `property-source` to the configured properties layered over the environment
//! - `instance-config` to the configured provider (data center by default)
//! - `discovery-client` when configuration picks a non-default provider
//! - `event-bus` (new) when configuration enables it

use super::ConfigurationModule;
use super::discovery::{discovery_client_descriptor, instance_config_descriptor};
use crate::config::AppConfig;
use crate::constants::{DEFAULT_DISCOVERY_CLIENT, DEPLOYMENT_OVERRIDE_MODULE};
use beacon_domain::constants::{DISCOVERY_CLIENT, EVENT_BUS, INSTANCE_CONFIG, PROPERTY_SOURCE};
use beacon_domain::error::Result;
use beacon_domain::ports::{EventBus, PropertySource};
use beacon_domain::value_objects::{BindingSet, Component};
use beacon_providers::{
    EnvPropertySource, LayeredPropertySource, MapPropertySource, TokioEventBusProvider,
};
use std::sync::Arc;

/// Bindings a deployment uses to replace library defaults
#[derive(Debug, Clone)]
pub struct DeploymentOverrideModule {
    config: AppConfig,
}

impl DeploymentOverrideModule {
    /// Create from the loaded configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn property_source(&self) -> Arc<dyn PropertySource> {
        let configured = MapPropertySource::new(
            DEPLOYMENT_OVERRIDE_MODULE,
            self.config.properties.clone(),
        );
        Arc::new(
            LayeredPropertySource::new()
                .then(Arc::new(configured))
                .then(Arc::new(EnvPropertySource::new())),
        )
    }
}

impl ConfigurationModule for DeploymentOverrideModule {
    fn name(&self) -> &str {
        DEPLOYMENT_OVERRIDE_MODULE
    }

    fn bindings(&self) -> Result<BindingSet> {
        let discovery = &self.config.discovery;
        let mut builder = BindingSet::builder(DEPLOYMENT_OVERRIDE_MODULE)
            .bind_instance(
                PROPERTY_SOURCE,
                "LayeredPropertySource",
                Component::new(self.property_source()),
            )
            .bind(INSTANCE_CONFIG, instance_config_descriptor(&discovery.instance_config)?);

        if discovery.client != DEFAULT_DISCOVERY_CLIENT {
            builder = builder.bind(DISCOVERY_CLIENT, discovery_client_descriptor(&discovery.client)?);
        }

        if discovery.event_bus {
            let bus: Arc<dyn EventBus> = Arc::new(TokioEventBusProvider::new());
            builder = builder.bind_instance(EVENT_BUS, "TokioEventBusProvider", Component::new(bus));
        }

        builder.build()
    }
}
