//! Null discovery client

use async_trait::async_trait;
use beacon_application::registry::discovery::{DiscoveryProviderEntry, DISCOVERY_PROVIDERS};
use beacon_domain::error::Result;
use beacon_domain::ports::DiscoveryClient;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Discovery client that talks to no registry
///
/// Useful for running a service standalone and for tests.
#[derive(Debug, Default)]
pub struct NullDiscoveryClient {
    registered: AtomicBool,
}

impl NullDiscoveryClient {
    /// Create a new null client
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiscoveryClient for NullDiscoveryClient {
    fn provider_name(&self) -> &str {
        "null"
    }

    async fn register(&self) -> Result<()> {
        debug!("Null discovery client: register");
        self.registered.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn renew(&self) -> Result<()> {
        Ok(())
    }

    async fn deregister(&self) -> Result<()> {
        debug!("Null discovery client: deregister");
        self.registered.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }
}

#[linkme::distributed_slice(DISCOVERY_PROVIDERS)]
static NULL_PROVIDER: DiscoveryProviderEntry = DiscoveryProviderEntry {
    name: "null",
    description: "No registry; tracks registration state only",
    factory: |_context| {
        let client: Arc<dyn DiscoveryClient> = Arc::new(NullDiscoveryClient::new());
        Ok(client)
    },
};
