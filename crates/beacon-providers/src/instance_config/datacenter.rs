//! Data center instance configuration
//!
//! Identity comes from the local host; every value can be overridden
//! through `instance.*` properties.

use super::CommonSettings;
use crate::constants::*;
use beacon_application::registry::instance_config::{
    InstanceConfigProviderEntry, INSTANCE_CONFIG_PROVIDERS,
};
use beacon_domain::error::Result;
use beacon_domain::ports::{InstanceConfig, PropertySource};
use beacon_domain::value_objects::DataCenterKind;
use std::sync::Arc;
use tracing::debug;

/// Instance configuration for self-managed data centers
#[derive(Debug, Clone)]
pub struct DataCenterInstanceConfig {
    common: CommonSettings,
    instance_id: String,
    host_name: String,
    ip_address: String,
}

impl DataCenterInstanceConfig {
    /// Read host facts and common settings
    pub fn from_properties(properties: &dyn PropertySource) -> Result<Self> {
        let host_name = properties.get(PROP_HOST_NAME).unwrap_or_else(local_host_name);
        let instance_id = properties
            .get(PROP_INSTANCE_ID)
            .unwrap_or_else(|| host_name.clone());
        let ip_address = properties.get_or(PROP_IP_ADDRESS, DEFAULT_IP_ADDRESS);
        debug!(host = %host_name, instance_id = %instance_id, "Resolved data center identity");
        Ok(Self {
            common: CommonSettings::read(properties)?,
            instance_id,
            host_name,
            ip_address,
        })
    }
}

fn local_host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}

impl InstanceConfig for DataCenterInstanceConfig {
    fn provider_name(&self) -> &str {
        "datacenter"
    }

    fn app_name(&self) -> &str {
        &self.common.app_name
    }

    fn instance_id(&self) -> &str {
        &self.instance_id
    }

    fn host_name(&self) -> &str {
        &self.host_name
    }

    fn ip_address(&self) -> &str {
        &self.ip_address
    }

    fn port(&self) -> u16 {
        self.common.port
    }

    fn vip_address(&self) -> &str {
        &self.common.vip_address
    }

    fn lease_renewal_interval_secs(&self) -> u64 {
        self.common.lease_renewal_interval_secs
    }

    fn lease_expiration_secs(&self) -> u64 {
        self.common.lease_expiration_secs
    }

    fn data_center(&self) -> DataCenterKind {
        DataCenterKind::MyOwn
    }
}

#[linkme::distributed_slice(INSTANCE_CONFIG_PROVIDERS)]
static DATACENTER_PROVIDER: InstanceConfigProviderEntry = InstanceConfigProviderEntry {
    name: "datacenter",
    description: "Identity from the local host (instance.* properties override)",
    factory: |properties| {
        let config: Arc<dyn InstanceConfig> =
            Arc::new(DataCenterInstanceConfig::from_properties(properties)?);
        Ok(config)
    },
};
