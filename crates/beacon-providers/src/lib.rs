//! # Beacon - Provider Implementations
//!
//! Each provider implements a port defined in `beacon-domain`. Providers
//! that are selectable by name register into the `beacon-application`
//! registries through `linkme`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Instance Config | `InstanceConfig` | Cloud, DataCenter |
//! | Instance Info | `InstanceInfoManager` | DefaultInstanceInfoManager |
//! | Discovery | `DiscoveryClient` | InMemory, Null |
//! | Events | `EventBus` | Tokio |
//! | Properties | `PropertySource` | Env, Map, Layered |

pub use beacon_domain::error::{Error, Result};

pub mod constants;
pub mod discovery;
pub mod events;
pub mod instance_config;
pub mod instance_info;
pub mod properties;

pub use discovery::{InMemoryDiscoveryClient, InMemoryRegistry, NullDiscoveryClient};
pub use events::TokioEventBusProvider;
pub use instance_config::{CloudInstanceConfig, DataCenterInstanceConfig};
pub use instance_info::DefaultInstanceInfoManager;
pub use properties::{EnvPropertySource, LayeredPropertySource, MapPropertySource};
