//! Lifecycle manager tests

use crate::test_utils::{Behavior, EventLog, RecordingHook};
use beacon_domain::error::Error;
use beacon_domain::value_objects::{Capability, LifecycleState};
use beacon_infrastructure::lifecycle::LifecycleManager;
use std::time::Duration;

fn cap(name: &'static str) -> Capability {
    Capability::from_static(name)
}

/// A; B -> A; C -> A, B, registered out of order
fn abc(log: &EventLog, b_init: Behavior) -> LifecycleManager {
    let mut manager = LifecycleManager::new();
    manager
        .register(cap("c"), vec![cap("a"), cap("b")], RecordingHook::new("c", log).shared())
        .unwrap();
    manager
        .register(
            cap("b"),
            vec![cap("a")],
            RecordingHook::new("b", log).with_init(b_init).shared(),
        )
        .unwrap();
    manager
        .register(cap("a"), vec![], RecordingHook::new("a", log).shared())
        .unwrap();
    manager
}

#[tokio::test]
async fn test_start_in_dependency_order_and_stop_in_reverse() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Succeed);

    manager.start().await.unwrap();
    assert_eq!(manager.state(), LifecycleState::Running);
    assert_eq!(manager.start_order(), &[cap("a"), cap("b"), cap("c")]);

    let report = manager.stop().await;
    assert_eq!(manager.state(), LifecycleState::Stopped);
    assert_eq!(report.stopped, vec![cap("c"), cap("b"), cap("a")]);
    assert!(report.is_clean());
    assert_eq!(
        log.entries(),
        vec!["init:a", "init:b", "init:c", "stop:c", "stop:b", "stop:a"]
    );
}

#[tokio::test]
async fn test_init_failure_stops_only_started_components() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Fail);

    let err = manager.start().await.unwrap_err();
    assert!(matches!(err, Error::ComponentInit { ref component, .. } if *component == cap("b")));
    assert_eq!(manager.state(), LifecycleState::Failed);
    assert_eq!(log.entries(), vec!["init:a", "init:b", "stop:a"]);

    let report = manager.stop().await;
    assert_eq!(manager.state(), LifecycleState::Stopped);
    assert_eq!(report.stopped, vec![cap("a")]);
    // Nothing is stopped twice
    assert_eq!(log.entries(), vec!["init:a", "init:b", "stop:a"]);
}

#[tokio::test]
async fn test_init_panic_is_contained() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Panic);

    let err = manager.start().await.unwrap_err();
    assert!(matches!(err, Error::ComponentInit { ref component, .. } if *component == cap("b")));
    assert!(err.to_string().contains("panicked"));
    assert_eq!(log.count("stop:a"), 1);
    assert_eq!(log.count("stop:c"), 0);
}

#[tokio::test]
async fn test_stop_is_idempotent() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Succeed);
    manager.start().await.unwrap();

    manager.stop().await;
    let second = manager.stop().await;

    assert_eq!(manager.state(), LifecycleState::Stopped);
    assert!(second.stopped.is_empty());
    assert_eq!(log.count("stop:a"), 1);
    assert_eq!(log.count("stop:c"), 1);
}

#[tokio::test]
async fn test_stop_before_start_does_nothing() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Succeed);

    let report = manager.stop().await;
    assert_eq!(manager.state(), LifecycleState::Uninitialized);
    assert!(report.stopped.is_empty());
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn test_stop_after_abandoned_start_stops_started_components() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Hang);

    let timed_out = tokio::time::timeout(Duration::from_millis(20), manager.start()).await;
    assert!(timed_out.is_err());
    assert_eq!(manager.state(), LifecycleState::Starting);

    let report = manager.stop().await;
    assert_eq!(manager.state(), LifecycleState::Stopped);
    assert_eq!(report.stopped, vec![cap("a")]);
    assert!(report.is_clean());
    assert_eq!(log.entries(), vec!["init:a", "init:b", "stop:a"]);

    let again = manager.stop().await;
    assert!(again.stopped.is_empty());
}

#[tokio::test]
async fn test_stop_failures_are_collected_not_propagated() {
    let log = EventLog::new();
    let mut manager = LifecycleManager::new();
    manager
        .register(cap("a"), vec![], RecordingHook::new("a", &log).shared())
        .unwrap();
    manager
        .register(
            cap("b"),
            vec![cap("a")],
            RecordingHook::new("b", &log).with_stop(Behavior::Fail).shared(),
        )
        .unwrap();
    manager.start().await.unwrap();

    let report = manager.stop().await;
    assert_eq!(manager.state(), LifecycleState::Stopped);
    assert_eq!(report.stopped, vec![cap("a")]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        Error::ComponentStop { ref component, .. } if *component == cap("b")
    ));
    assert_eq!(log.entries(), vec!["init:a", "init:b", "stop:b", "stop:a"]);
}

#[tokio::test]
async fn test_start_and_register_rejected_after_start() {
    let log = EventLog::new();
    let mut manager = abc(&log, Behavior::Succeed);
    manager.start().await.unwrap();

    let err = manager.start().await.unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLifecycleState { operation: "start", state: LifecycleState::Running }
    ));
    let err = manager.register(cap("d"), vec![], None).unwrap_err();
    assert!(matches!(err, Error::InvalidLifecycleState { operation: "register", .. }));
    manager.stop().await;
}

#[tokio::test]
async fn test_components_without_hooks_take_part_in_ordering() {
    let log = EventLog::new();
    let mut manager = LifecycleManager::new();
    manager
        .register(cap("client"), vec![cap("config")], RecordingHook::new("client", &log).shared())
        .unwrap();
    manager.register(cap("config"), vec![], None).unwrap();

    manager.start().await.unwrap();
    assert_eq!(manager.start_order(), &[cap("config"), cap("client")]);

    let report = manager.stop().await;
    assert_eq!(report.stopped, vec![cap("client")]);
}

#[tokio::test]
async fn test_cyclic_registration_fails_start() {
    let mut manager = LifecycleManager::new();
    manager.register(cap("a"), vec![cap("b")], None).unwrap();
    manager.register(cap("b"), vec![cap("a")], None).unwrap();

    let err = manager.start().await.unwrap_err();
    assert!(matches!(err, Error::CyclicDependency { .. }));
    assert_eq!(manager.state(), LifecycleState::Failed);

    manager.stop().await;
    assert_eq!(manager.state(), LifecycleState::Stopped);
}
