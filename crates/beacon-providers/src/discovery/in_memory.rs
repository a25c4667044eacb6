//! In-process discovery registry
//!
//! A registry living in the current process, plus a client that registers
//! with it and renews its lease on a background task. Stands in for a
//! remote discovery service when running locally and in tests.
//!
//! ```text
//! register ──▶ InMemoryRegistry::register ──▶ spawn renewal task
//!                                                   │ every lease interval
//!                                                   ▼
//!                                        InMemoryRegistry::renew
//! deregister ─▶ cancel renewal task ──▶ InMemoryRegistry::cancel
//! ```

use async_trait::async_trait;
use beacon_application::registry::discovery::{
    DiscoveryClientContext, DiscoveryProviderEntry, DISCOVERY_PROVIDERS,
};
use beacon_domain::error::{Error, Result};
use beacon_domain::ports::{DiscoveryClient, DiscoveryEvent, EventBus, InstanceInfoManager};
use beacon_domain::value_objects::InstanceInfo;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Lease held by one registered instance
#[derive(Debug, Clone)]
pub struct LeaseRecord {
    /// Last info pushed by the instance
    pub info: InstanceInfo,
    /// When the instance registered
    pub registered_at: Instant,
    /// When the lease was last renewed
    pub last_renewal: Instant,
    /// Number of renewals since registration
    pub renewals: u64,
}

/// Registry of leases keyed by instance id
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    leases: DashMap<String, LeaseRecord>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the lease for `info.instance_id`
    pub fn register(&self, info: InstanceInfo) {
        let now = Instant::now();
        self.leases.insert(
            info.instance_id.clone(),
            LeaseRecord {
                info,
                registered_at: now,
                last_renewal: now,
                renewals: 0,
            },
        );
    }

    /// Renew a lease; `false` when the instance is unknown
    pub fn renew(&self, info: InstanceInfo) -> bool {
        match self.leases.get_mut(&info.instance_id) {
            Some(mut lease) => {
                lease.info = info;
                lease.last_renewal = Instant::now();
                lease.renewals += 1;
                true
            }
            None => false,
        }
    }

    /// Drop a lease; `false` when the instance is unknown
    pub fn cancel(&self, instance_id: &str) -> bool {
        self.leases.remove(instance_id).is_some()
    }

    /// Lease for `instance_id`
    pub fn lease(&self, instance_id: &str) -> Option<LeaseRecord> {
        self.leases.get(instance_id).map(|lease| lease.clone())
    }

    /// Instances registered under `app_name`
    pub fn instances_of(&self, app_name: &str) -> Vec<InstanceInfo> {
        self.leases
            .iter()
            .filter(|lease| lease.info.app_name.eq_ignore_ascii_case(app_name))
            .map(|lease| lease.info.clone())
            .collect()
    }

    /// Drop leases not renewed within `expiration`, returning their ids
    pub fn evict_expired(&self, expiration: Duration) -> Vec<String> {
        let now = Instant::now();
        let expired: Vec<String> = self
            .leases
            .iter()
            .filter(|lease| now.duration_since(lease.last_renewal) > expiration)
            .map(|lease| lease.key().clone())
            .collect();
        for id in &expired {
            self.leases.remove(id);
        }
        expired
    }

    /// Number of leases
    pub fn len(&self) -> usize {
        self.leases.len()
    }

    /// Whether the registry holds no lease
    pub fn is_empty(&self) -> bool {
        self.leases.is_empty()
    }
}

struct RenewalTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Discovery client registering with an [`InMemoryRegistry`]
pub struct InMemoryDiscoveryClient {
    registry: Arc<InMemoryRegistry>,
    info: Arc<dyn InstanceInfoManager>,
    events: Option<Arc<dyn EventBus>>,
    renewal_interval: Duration,
    registered: AtomicBool,
    renewal: Mutex<Option<RenewalTask>>,
}

impl InMemoryDiscoveryClient {
    /// Create a client renewing every `renewal_interval`
    pub fn new(
        registry: Arc<InMemoryRegistry>,
        info: Arc<dyn InstanceInfoManager>,
        renewal_interval: Duration,
    ) -> Self {
        Self {
            registry,
            info,
            events: None,
            renewal_interval: renewal_interval.max(Duration::from_millis(1)),
            registered: AtomicBool::new(false),
            renewal: Mutex::new(None),
        }
    }

    /// Publish registration events to `events`
    #[must_use]
    pub fn with_events(mut self, events: Arc<dyn EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Registry the client registers with
    pub fn registry(&self) -> Arc<InMemoryRegistry> {
        Arc::clone(&self.registry)
    }

    fn spawn_renewal(&self) -> RenewalTask {
        let token = CancellationToken::new();
        let child = token.clone();
        let registry = Arc::clone(&self.registry);
        let info = Arc::clone(&self.info);
        let events = self.events.clone();
        let period = self.renewal_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    () = child.cancelled() => break,
                    _ = ticker.tick() => {
                        let snapshot = info.info();
                        if registry.renew(snapshot.clone()) {
                            debug!(instance_id = %snapshot.instance_id, "Lease renewed");
                            publish(events.as_deref(), DiscoveryEvent::Renewed {
                                instance_id: snapshot.instance_id,
                                status: snapshot.status,
                            })
                            .await;
                        } else {
                            warn!(instance_id = %snapshot.instance_id, "Lease unknown to registry, re-registering");
                            registry.register(snapshot);
                        }
                    }
                }
            }
        });

        RenewalTask { token, handle }
    }
}

async fn publish(events: Option<&dyn EventBus>, event: DiscoveryEvent) {
    if let Some(bus) = events
        && let Err(e) = bus.publish(event).await
    {
        warn!("Failed to publish discovery event: {}", e);
    }
}

impl std::fmt::Debug for InMemoryDiscoveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDiscoveryClient")
            .field("leases", &self.registry.len())
            .field("renewal_interval", &self.renewal_interval)
            .field("registered", &self.is_registered())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DiscoveryClient for InMemoryDiscoveryClient {
    fn provider_name(&self) -> &str {
        "in-memory"
    }

    async fn register(&self) -> Result<()> {
        let snapshot = self.info.info();
        info!(
            app = %snapshot.app_name,
            instance_id = %snapshot.instance_id,
            "Registering instance"
        );
        self.registry.register(snapshot.clone());

        {
            let mut renewal = self.renewal.lock().unwrap_or_else(PoisonError::into_inner);
            if renewal.is_none() {
                *renewal = Some(self.spawn_renewal());
            }
        }
        self.registered.store(true, Ordering::SeqCst);

        publish(
            self.events.as_deref(),
            DiscoveryEvent::Registered {
                app_name: snapshot.app_name,
                instance_id: snapshot.instance_id,
            },
        )
        .await;
        Ok(())
    }

    async fn renew(&self) -> Result<()> {
        if !self.is_registered() {
            return Err(Error::discovery("Cannot renew: instance is not registered"));
        }
        let snapshot = self.info.info();
        if !self.registry.renew(snapshot.clone()) {
            return Err(Error::discovery(format!(
                "Lease for {} is unknown to the registry",
                snapshot.instance_id
            )));
        }
        publish(
            self.events.as_deref(),
            DiscoveryEvent::Renewed {
                instance_id: snapshot.instance_id,
                status: snapshot.status,
            },
        )
        .await;
        Ok(())
    }

    async fn deregister(&self) -> Result<()> {
        let task = self
            .renewal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            task.token.cancel();
            if let Err(e) = task.handle.await {
                warn!("Lease renewal task ended abnormally: {}", e);
            }
        }

        if !self.registered.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        let instance_id = self.info.info().instance_id;
        info!(instance_id = %instance_id, "Deregistering instance");
        if !self.registry.cancel(&instance_id) {
            warn!(instance_id = %instance_id, "Instance was already gone from the registry");
        }
        publish(
            self.events.as_deref(),
            DiscoveryEvent::Deregistered { instance_id },
        )
        .await;
        Ok(())
    }

    fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }
}

fn in_memory_factory(context: DiscoveryClientContext) -> Result<Arc<dyn DiscoveryClient>> {
    let interval = Duration::from_secs(context.config.lease_renewal_interval_secs());
    let mut client =
        InMemoryDiscoveryClient::new(Arc::new(InMemoryRegistry::new()), context.info, interval);
    if let Some(events) = context.events {
        client = client.with_events(events);
    }
    Ok(Arc::new(client))
}

#[linkme::distributed_slice(DISCOVERY_PROVIDERS)]
static IN_MEMORY_PROVIDER: DiscoveryProviderEntry = DiscoveryProviderEntry {
    name: "in-memory",
    description: "In-process registry with background lease renewal",
    factory: in_memory_factory,
};
