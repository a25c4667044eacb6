//! Instance configuration port

use crate::value_objects::{DataCenterKind, InstanceInfo, InstanceStatus};
use std::collections::BTreeMap;

/// "Who am I" facts used to build the registry entry
pub trait InstanceConfig: Send + Sync {
    /// Provider name (e.g. "cloud", "datacenter")
    fn provider_name(&self) -> &str;

    /// Application name
    fn app_name(&self) -> &str;

    /// Unique id within the application
    fn instance_id(&self) -> &str;

    /// Host name
    fn host_name(&self) -> &str;

    /// IP address
    fn ip_address(&self) -> &str;

    /// Port traffic is served on
    fn port(&self) -> u16;

    /// Virtual address clients use
    fn vip_address(&self) -> &str;

    /// Seconds between lease renewals
    fn lease_renewal_interval_secs(&self) -> u64;

    /// Seconds after which a lease without renewal expires
    fn lease_expiration_secs(&self) -> u64;

    /// Data center kind
    fn data_center(&self) -> DataCenterKind;

    /// Free-form metadata
    fn metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Initial instance info derived from this configuration
    fn to_instance_info(&self) -> InstanceInfo {
        InstanceInfo {
            app_name: self.app_name().to_uppercase(),
            instance_id: self.instance_id().to_string(),
            host_name: self.host_name().to_string(),
            ip_address: self.ip_address().to_string(),
            port: self.port(),
            vip_address: self.vip_address().to_string(),
            data_center: self.data_center(),
            status: InstanceStatus::Starting,
            metadata: self.metadata(),
        }
    }
}
