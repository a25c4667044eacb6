//! Tokio Broadcast Event Bus Provider
//!
//! In-process event distribution over a tokio broadcast channel. When the
//! channel is full the oldest events are dropped; lagging subscribers skip
//! ahead with a warning.

use crate::constants::EVENT_BUS_CAPACITY;
use async_trait::async_trait;
use beacon_domain::error::Result;
use beacon_domain::ports::{DiscoveryEvent, DiscoveryEventStream, EventBus};
use futures::stream;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Event bus using tokio broadcast channels
#[derive(Clone)]
pub struct TokioEventBusProvider {
    sender: Arc<broadcast::Sender<DiscoveryEvent>>,
    capacity: usize,
}

impl TokioEventBusProvider {
    /// Create a new tokio event bus with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioEventBusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBusProvider")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventBus for TokioEventBusProvider {
    async fn publish(&self, event: DiscoveryEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => debug!("Published discovery event to {} subscribers", count),
            Err(_) => debug!("Published discovery event but no subscribers"),
        }
        Ok(())
    }

    fn subscribe(&self) -> DiscoveryEventStream {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Discovery event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
