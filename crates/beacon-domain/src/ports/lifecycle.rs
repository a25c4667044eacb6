//! Lifecycle hooks

use crate::error::Result;
use async_trait::async_trait;

/// Component that takes part in ordered startup and shutdown
///
/// `init` runs once after every dependency finished its own `init`.
/// `stop` runs at most once, in reverse start order, and only if `init`
/// succeeded.
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use beacon_domain::ports::LifecycleManaged;
/// use beacon_domain::Result;
///
/// struct Heartbeat;
///
/// #[async_trait]
/// impl LifecycleManaged for Heartbeat {
///     async fn init(&self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait LifecycleManaged: Send + Sync {
    /// Initialize the component
    async fn init(&self) -> Result<()>;

    /// Release what `init` acquired
    async fn stop(&self) -> Result<()> {
        Ok(())
    }
}
