//! Discovery client lifecycle adapter

use async_trait::async_trait;
use beacon_domain::error::Result;
use beacon_domain::ports::{DiscoveryClient, LifecycleManaged};
use std::sync::Arc;
use tracing::debug;

/// Registers the instance on init and deregisters it on stop
pub struct DiscoveryLifecycle {
    client: Arc<dyn DiscoveryClient>,
}

impl DiscoveryLifecycle {
    /// Wrap `client`
    pub fn new(client: Arc<dyn DiscoveryClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LifecycleManaged for DiscoveryLifecycle {
    async fn init(&self) -> Result<()> {
        debug!(provider = self.client.provider_name(), "Starting discovery client");
        self.client.register().await
    }

    async fn stop(&self) -> Result<()> {
        debug!(provider = self.client.provider_name(), "Stopping discovery client");
        self.client.deregister().await
    }
}
