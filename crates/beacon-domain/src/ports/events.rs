//! Event bus port

use crate::error::Result;
use crate::value_objects::InstanceStatus;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Events published by discovery clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscoveryEvent {
    /// Instance registered
    Registered {
        /// Application name
        app_name: String,
        /// Instance id
        instance_id: String,
    },
    /// Lease renewed
    Renewed {
        /// Instance id
        instance_id: String,
        /// Status sent with the renewal
        status: InstanceStatus,
    },
    /// Instance removed
    Deregistered {
        /// Instance id
        instance_id: String,
    },
}

/// Stream of discovery events
pub type DiscoveryEventStream = Pin<Box<dyn Stream<Item = DiscoveryEvent> + Send>>;

/// In-process publish/subscribe for discovery events
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish an event to every subscriber
    async fn publish(&self, event: DiscoveryEvent) -> Result<()>;

    /// Subscribe to events published after this call
    fn subscribe(&self) -> DiscoveryEventStream;

    /// Whether anyone is listening
    fn has_subscribers(&self) -> bool;
}
