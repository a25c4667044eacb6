//! Discovery registration ports

use crate::error::Result;
use crate::value_objects::{InstanceInfo, InstanceStatus};
use async_trait::async_trait;

/// Client registering this instance with a discovery service
///
/// Registered as a lifecycle-managed component: its init hook registers and
/// its stop hook deregisters. The wire protocol belongs to the provider.
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Provider name (e.g. "in-memory", "null")
    fn provider_name(&self) -> &str;

    /// Register the current instance info
    async fn register(&self) -> Result<()>;

    /// Renew the lease and push the current instance info
    async fn renew(&self) -> Result<()>;

    /// Remove the instance from the registry
    async fn deregister(&self) -> Result<()>;

    /// Whether the instance is currently registered
    fn is_registered(&self) -> bool;
}

/// Owner of the instance info published by the discovery client
pub trait InstanceInfoManager: Send + Sync {
    /// Current snapshot
    fn info(&self) -> InstanceInfo;

    /// Current status
    fn status(&self) -> InstanceStatus;

    /// Change the status, returning the previous one
    fn set_status(&self, status: InstanceStatus) -> InstanceStatus;
}
