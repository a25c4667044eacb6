//! Well-known capabilities
//!
//! Shared by the library modules, the deployment overrides and the
//! providers that resolve each other through them.

use crate::value_objects::Capability;

/// Key/value override source (`dyn PropertySource`)
pub const PROPERTY_SOURCE: Capability = Capability::from_static("property-source");

/// Instance configuration (`dyn InstanceConfig`)
pub const INSTANCE_CONFIG: Capability = Capability::from_static("instance-config");

/// Instance info owner (`dyn InstanceInfoManager`)
pub const INSTANCE_INFO: Capability = Capability::from_static("instance-info");

/// Discovery registration client (`dyn DiscoveryClient`)
pub const DISCOVERY_CLIENT: Capability = Capability::from_static("discovery-client");

/// Discovery event bus (`dyn EventBus`), optional
pub const EVENT_BUS: Capability = Capability::from_static("event-bus");

/// The application being bootstrapped (`dyn Application`)
pub const APPLICATION: Capability = Capability::from_static("application");
