//! Instance metadata published to the discovery service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where the instance runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataCenterKind {
    /// Self-managed data center
    MyOwn,
    /// Cloud provider
    Cloud,
}

/// Registration status of an instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    /// Registered but not ready for traffic
    #[default]
    Starting,
    /// Ready for traffic
    Up,
    /// Shutting down or unhealthy
    Down,
    /// Taken out of rotation by an operator
    OutOfService,
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstanceStatus::Starting => "STARTING",
            InstanceStatus::Up => "UP",
            InstanceStatus::Down => "DOWN",
            InstanceStatus::OutOfService => "OUT_OF_SERVICE",
        };
        f.write_str(name)
    }
}

/// Snapshot describing this instance to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    /// Application name, upper-cased by convention
    pub app_name: String,
    /// Unique id within the application
    pub instance_id: String,
    /// Host name
    pub host_name: String,
    /// IP address
    pub ip_address: String,
    /// Port traffic is served on
    pub port: u16,
    /// Virtual address clients resolve the application by
    pub vip_address: String,
    /// Data center kind
    pub data_center: DataCenterKind,
    /// Current status
    pub status: InstanceStatus,
    /// Free-form metadata
    pub metadata: BTreeMap<String, String>,
}
