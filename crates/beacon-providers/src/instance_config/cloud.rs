//! Cloud instance configuration
//!
//! Identity comes from cloud instance metadata, surfaced as `cloud.*`
//! properties. Construction fails when the metadata is absent, which is the
//! case on any host outside the cloud.

use super::CommonSettings;
use crate::constants::*;
use beacon_application::registry::instance_config::{
    InstanceConfigProviderEntry, INSTANCE_CONFIG_PROVIDERS,
};
use beacon_domain::error::Result;
use beacon_domain::ports::{InstanceConfig, PropertySource};
use beacon_domain::value_objects::DataCenterKind;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Instance configuration for hosts running in the cloud
#[derive(Debug, Clone)]
pub struct CloudInstanceConfig {
    common: CommonSettings,
    instance_id: String,
    host_name: String,
    ip_address: String,
    availability_zone: Option<String>,
}

impl CloudInstanceConfig {
    /// Read cloud metadata and common settings from `properties`
    pub fn from_properties(properties: &dyn PropertySource) -> Result<Self> {
        let instance_id = properties.require(PROP_CLOUD_INSTANCE_ID)?;
        let host_name = properties.require(PROP_CLOUD_LOCAL_HOSTNAME)?;
        let ip_address = properties.require(PROP_CLOUD_LOCAL_IPV4)?;
        Ok(Self {
            common: CommonSettings::read(properties)?,
            instance_id,
            host_name,
            ip_address,
            availability_zone: properties.get(PROP_CLOUD_AVAILABILITY_ZONE),
        })
    }
}

impl InstanceConfig for CloudInstanceConfig {
    fn provider_name(&self) -> &str {
        "cloud"
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
        DataCenterKind::Cloud
    }

    fn metadata(&self) -> BTreeMap<String, String> {
        self.availability_zone
            .iter()
            .map(|zone| ("availability-zone".to_string(), zone.clone()))
            .collect()
    }
}

#[linkme::distributed_slice(INSTANCE_CONFIG_PROVIDERS)]
static CLOUD_PROVIDER: InstanceConfigProviderEntry = InstanceConfigProviderEntry {
    name: "cloud",
    description: "Identity from cloud instance metadata (cloud.* properties)",
    factory: |properties| {
        let config: Arc<dyn InstanceConfig> =
            Arc::new(CloudInstanceConfig::from_properties(properties)?);
        Ok(config)
    },
};
