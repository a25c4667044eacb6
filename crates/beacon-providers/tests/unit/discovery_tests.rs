//! In-memory discovery client tests

use beacon_domain::ports::{DiscoveryClient, DiscoveryEvent, EventBus, InstanceInfoManager};
use beacon_domain::value_objects::{DataCenterKind, InstanceInfo, InstanceStatus};
use beacon_providers::{
    DefaultInstanceInfoManager, InMemoryDiscoveryClient, InMemoryRegistry, TokioEventBusProvider,
};
use futures::StreamExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

fn instance(id: &str) -> InstanceInfo {
    InstanceInfo {
        app_name: "ORDERS".to_string(),
        instance_id: id.to_string(),
        host_name: "orders-1.local".to_string(),
        ip_address: "10.0.0.7".to_string(),
        port: 8080,
        vip_address: "orders".to_string(),
        data_center: DataCenterKind::MyOwn,
        status: InstanceStatus::Starting,
        metadata: BTreeMap::new(),
    }
}

fn client(
    registry: &Arc<InMemoryRegistry>,
    id: &str,
    interval: Duration,
) -> (InMemoryDiscoveryClient, Arc<DefaultInstanceInfoManager>) {
    let info = Arc::new(DefaultInstanceInfoManager::from_info(instance(id)));
    let client = InMemoryDiscoveryClient::new(Arc::clone(registry), info.clone(), interval);
    (client, info)
}

#[tokio::test]
async fn test_register_then_deregister_round_trip() {
    let registry = Arc::new(InMemoryRegistry::new());
    let (client, _) = client(&registry, "orders-1", Duration::from_secs(30));

    client.register().await.unwrap();
    assert!(client.is_registered());
    assert!(registry.lease("orders-1").is_some());
    assert_eq!(registry.instances_of("orders").len(), 1);

    client.deregister().await.unwrap();
    assert!(!client.is_registered());
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_deregister_is_idempotent() {
    let registry = Arc::new(InMemoryRegistry::new());
    let (client, _) = client(&registry, "orders-1", Duration::from_secs(30));

    client.deregister().await.unwrap();
    client.register().await.unwrap();
    client.deregister().await.unwrap();
    client.deregister().await.unwrap();

    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_renew_requires_registration() {
    let registry = Arc::new(InMemoryRegistry::new());
    let (client, info) = client(&registry, "orders-1", Duration::from_secs(30));

    assert!(client.renew().await.is_err());

    client.register().await.unwrap();
    info.set_status(InstanceStatus::Up);
    client.renew().await.unwrap();

    let lease = registry.lease("orders-1").unwrap();
    assert_eq!(lease.renewals, 1);
    assert_eq!(lease.info.status, InstanceStatus::Up);
}

#[tokio::test(start_paused = true)]
async fn test_background_renewal_runs_until_deregistered() {
    let registry = Arc::new(InMemoryRegistry::new());
    let (client, _) = client(&registry, "orders-1", Duration::from_secs(10));

    client.register().await.unwrap();
    tokio::time::sleep(Duration::from_secs(35)).await;
    let renewed = registry.lease("orders-1").unwrap().renewals;
    assert!(renewed >= 3, "expected at least 3 renewals, got {renewed}");

    client.deregister().await.unwrap();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(registry.lease("orders-1").is_none());
}

#[tokio::test]
async fn test_lifecycle_events_are_published() {
    let registry = Arc::new(InMemoryRegistry::new());
    let bus = Arc::new(TokioEventBusProvider::new());
    let mut events = bus.subscribe();
    let (client, _) = client(&registry, "orders-1", Duration::from_secs(30));
    let client = client.with_events(bus);

    client.register().await.unwrap();
    client.renew().await.unwrap();
    client.deregister().await.unwrap();

    assert!(matches!(
        events.next().await,
        Some(DiscoveryEvent::Registered { ref instance_id, .. }) if instance_id == "orders-1"
    ));
    assert!(matches!(
        events.next().await,
        Some(DiscoveryEvent::Renewed { .. })
    ));
    assert!(matches!(
        events.next().await,
        Some(DiscoveryEvent::Deregistered { ref instance_id }) if instance_id == "orders-1"
    ));
}

#[test]
fn test_evict_expired_drops_stale_leases() {
    let registry = InMemoryRegistry::new();
    registry.register(instance("orders-1"));
    registry.register(instance("orders-2"));

    assert!(registry.evict_expired(Duration::from_secs(90)).is_empty());

    std::thread::sleep(Duration::from_millis(20));
    let mut evicted = registry.evict_expired(Duration::from_millis(5));
    evicted.sort();
    assert_eq!(evicted, vec!["orders-1", "orders-2"]);
    assert!(registry.is_empty());
}
