//! Application contract

use crate::error::Result;
use async_trait::async_trait;

/// The service being bootstrapped
///
/// `start` is awaited for as long as the service chooses to run. `stop` is
/// invoked exactly once after `start` was invoked, even if `start` failed
/// partway, so it must tolerate a half-started service.
#[async_trait]
pub trait Application: Send + Sync {
    /// Application name used in logs and errors
    fn name(&self) -> &str;

    /// Run the service
    async fn start(&self) -> Result<()>;

    /// Stop the service
    async fn stop(&self) -> Result<()>;
}
