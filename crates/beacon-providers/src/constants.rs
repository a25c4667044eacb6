//! Provider property keys and defaults

/// Application name
pub const PROP_APP_NAME: &str = "instance.app-name";
/// Instance id override
pub const PROP_INSTANCE_ID: &str = "instance.id";
/// Host name override
pub const PROP_HOST_NAME: &str = "instance.host-name";
/// IP address override
pub const PROP_IP_ADDRESS: &str = "instance.ip-address";
/// Service port
pub const PROP_PORT: &str = "instance.port";
/// Virtual address
pub const PROP_VIP_ADDRESS: &str = "instance.vip-address";
/// Lease renewal interval in seconds
pub const PROP_LEASE_RENEWAL_SECS: &str = "instance.lease-renewal-interval-secs";
/// Lease expiration in seconds
pub const PROP_LEASE_EXPIRATION_SECS: &str = "instance.lease-expiration-secs";

/// Cloud instance id, only present on cloud hosts
pub const PROP_CLOUD_INSTANCE_ID: &str = "cloud.instance-id";
/// Cloud private host name
pub const PROP_CLOUD_LOCAL_HOSTNAME: &str = "cloud.local-hostname";
/// Cloud private IPv4
pub const PROP_CLOUD_LOCAL_IPV4: &str = "cloud.local-ipv4";
/// Cloud availability zone
pub const PROP_CLOUD_AVAILABILITY_ZONE: &str = "cloud.availability-zone";

/// Default application name
pub const DEFAULT_APP_NAME: &str = "unknown";
/// Default service port
pub const DEFAULT_PORT: u16 = 8080;
/// Default IP address when none is configured
pub const DEFAULT_IP_ADDRESS: &str = "127.0.0.1";
/// Default lease renewal interval in seconds
pub const DEFAULT_LEASE_RENEWAL_SECS: u64 = 30;
/// Default lease expiration in seconds
pub const DEFAULT_LEASE_EXPIRATION_SECS: u64 = 90;

/// Environment prefix used by [`crate::EnvPropertySource`]
pub const DEFAULT_ENV_PROPERTY_PREFIX: &str = "BEACON_PROP";

/// Default broadcast channel capacity
pub const EVENT_BUS_CAPACITY: usize = 1024;
