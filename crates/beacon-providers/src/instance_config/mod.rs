//! Instance Config Provider Implementations
//!
//! | Provider | Name | Description |
//! |----------|------|-------------|
//! | CloudInstanceConfig | `cloud` | Identity from cloud instance metadata |
//! | DataCenterInstanceConfig | `datacenter` | Identity from the local host |

pub mod cloud;
pub mod datacenter;

pub use cloud::CloudInstanceConfig;
pub use datacenter::DataCenterInstanceConfig;

use crate::constants::*;
use beacon_domain::error::Result;
use beacon_domain::ports::PropertySource;

/// Settings shared by every instance config provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommonSettings {
    pub app_name: String,
    pub port: u16,
    pub vip_address: String,
    pub lease_renewal_interval_secs: u64,
    pub lease_expiration_secs: u64,
}

impl CommonSettings {
    pub(crate) fn read(properties: &dyn PropertySource) -> Result<Self> {
        let app_name = properties.get_or(PROP_APP_NAME, DEFAULT_APP_NAME);
        let vip_address = properties
            .get(PROP_VIP_ADDRESS)
            .unwrap_or_else(|| app_name.to_lowercase());
        Ok(Self {
            port: properties.get_parsed(PROP_PORT, DEFAULT_PORT)?,
            lease_renewal_interval_secs: properties
                .get_parsed(PROP_LEASE_RENEWAL_SECS, DEFAULT_LEASE_RENEWAL_SECS)?,
            lease_expiration_secs: properties
                .get_parsed(PROP_LEASE_EXPIRATION_SECS, DEFAULT_LEASE_EXPIRATION_SECS)?,
            app_name,
            vip_address,
        })
    }
}
