//! Instance info owner

use beacon_domain::ports::{InstanceConfig, InstanceInfoManager};
use beacon_domain::value_objects::{InstanceInfo, InstanceStatus};
use std::sync::{PoisonError, RwLock};
use tracing::info;

/// Holds the instance info published by the discovery client
///
/// Built once from the instance configuration; afterwards only the status
/// changes.
#[derive(Debug)]
pub struct DefaultInstanceInfoManager {
    info: RwLock<InstanceInfo>,
}

impl DefaultInstanceInfoManager {
    /// Create from an instance configuration
    pub fn new(config: &dyn InstanceConfig) -> Self {
        Self::from_info(config.to_instance_info())
    }

    /// Create from a prepared snapshot
    pub fn from_info(info: InstanceInfo) -> Self {
        Self {
            info: RwLock::new(info),
        }
    }
}

impl InstanceInfoManager for DefaultInstanceInfoManager {
    fn info(&self) -> InstanceInfo {
        self.info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn status(&self) -> InstanceStatus {
        self.info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status
    }

    fn set_status(&self, status: InstanceStatus) -> InstanceStatus {
        let mut info = self.info.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut info.status, status);
        if previous != status {
            info!(
                app = %info.app_name,
                instance_id = %info.instance_id,
                from = %previous,
                to = %status,
                "Instance status changed"
            );
        }
        previous
    }
}
