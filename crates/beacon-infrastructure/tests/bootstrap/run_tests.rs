//! Bootstrap entry point tests

use crate::test_utils::{Behavior, EventLog, ScriptedApplication, managed, managed_with};
use beacon_domain::constants::APPLICATION;
use beacon_domain::error::Error;
use beacon_domain::value_objects::{BindingSet, Capability, Component, ImplementationDescriptor};
use beacon_infrastructure::Bootstrap;
use std::sync::Arc;

fn cap(name: &'static str) -> Capability {
    Capability::from_static(name)
}

fn components(log: &EventLog, b_init: Behavior) -> BindingSet {
    BindingSet::builder("components")
        .bind("a", managed("a", log, &[]))
        .bind("b", managed_with("b", log, &["a"], b_init))
        .bind("c", managed("c", log, &["a", "b"]))
        .build()
        .unwrap()
}

fn with_app(log: &EventLog, b_init: Behavior, app: ScriptedApplication) -> BindingSet {
    BindingSet::from_bindings(
        "base",
        components(log, b_init)
            .iter()
            .cloned()
            .chain(
                BindingSet::builder("app")
                    .bind(APPLICATION, app.descriptor(&["c"]))
                    .build()
                    .unwrap()
                    .iter()
                    .cloned(),
            )
            .collect::<Vec<_>>(),
    )
}

fn lifecycle_entries(log: &EventLog) -> Vec<String> {
    log.entries()
        .into_iter()
        .filter(|e| !e.starts_with("construct:"))
        .collect()
}

#[tokio::test]
async fn test_graceful_run() {
    let log = EventLog::new();
    let base = with_app(&log, Behavior::Succeed, ScriptedApplication::new(&log));

    let outcome = Bootstrap::new(base).run().await;

    assert!(outcome.is_success());
    assert_eq!(outcome.exit_code(), 0);
    assert!(outcome.application_started);
    assert_eq!(&outcome.start_order[..3], &[cap("a"), cap("b"), cap("c")]);
    assert_eq!(
        lifecycle_entries(&log),
        vec![
            "init:a", "init:b", "init:c", "app:start", "app:stop", "stop:c", "stop:b", "stop:a"
        ]
    );
    assert_eq!(outcome.shutdown.stopped, vec![cap("c"), cap("b"), cap("a")]);
}

#[tokio::test]
async fn test_application_failure_still_stops_everything_once() {
    let log = EventLog::new();
    let app = ScriptedApplication::new(&log).with_start(Behavior::Fail);
    let base = with_app(&log, Behavior::Succeed, app);

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(outcome.error, Some(Error::ApplicationRuntime { .. })));
    assert_eq!(log.count("app:stop"), 1);
    for component in ["a", "b", "c"] {
        assert_eq!(log.count(&format!("stop:{component}")), 1);
    }
}

#[tokio::test]
async fn test_application_panic_still_stops_everything_once() {
    let log = EventLog::new();
    let app = ScriptedApplication::new(&log).with_start(Behavior::Panic);
    let base = with_app(&log, Behavior::Succeed, app);

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 1);
    let error = outcome.error.as_ref().unwrap();
    assert!(error.to_string().contains("panicked"));
    assert_eq!(log.count("app:stop"), 1);
    assert_eq!(log.count("stop:a"), 1);
}

#[tokio::test]
async fn test_init_failure_never_starts_application() {
    let log = EventLog::new();
    let base = with_app(&log, Behavior::Fail, ScriptedApplication::new(&log));

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(
        outcome.error,
        Some(Error::ComponentInit { ref component, .. }) if *component == cap("b")
    ));
    assert!(!outcome.application_started);
    assert_eq!(lifecycle_entries(&log), vec!["init:a", "init:b", "stop:a"]);
    assert_eq!(outcome.shutdown.stopped, vec![cap("a")]);
}

#[tokio::test]
async fn test_build_failure_runs_nothing() {
    let log = EventLog::new();
    let base = BindingSet::builder("base")
        .bind("a", managed("a", &log, &["missing"]))
        .bind(APPLICATION, ScriptedApplication::new(&log).descriptor(&["a"]))
        .build()
        .unwrap();

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(
        outcome.error,
        Some(Error::MissingBinding { ref capability, ref requested_by })
            if capability.as_str() == "missing" && requested_by == "a"
    ));
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn test_application_stop_failure_is_reported_not_fatal() {
    let log = EventLog::new();
    let app = ScriptedApplication::new(&log).with_stop(Behavior::Fail);
    let base = with_app(&log, Behavior::Succeed, app);

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(outcome.shutdown.failures.len(), 1);
    assert!(matches!(
        outcome.shutdown.failures[0],
        Error::ComponentStop { ref component, .. } if *component == APPLICATION
    ));
    assert_eq!(log.count("stop:a"), 1);
}

#[tokio::test]
async fn test_missing_application_skips_application_stop() {
    let log = EventLog::new();
    let base = components(&log, Behavior::Succeed);

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(outcome.error, Some(Error::MissingBinding { .. })));
    assert!(!outcome.application_started);
    assert_eq!(log.count("app:stop"), 0);
    assert_eq!(outcome.shutdown.stopped, vec![cap("c"), cap("b"), cap("a")]);
}

#[tokio::test]
async fn test_override_replaces_component_before_build() {
    let log = EventLog::new();
    let base = with_app(&log, Behavior::Fail, ScriptedApplication::new(&log));
    let fixed = BindingSet::builder("fix")
        .bind("b", managed("b", &log, &["a"]))
        .build()
        .unwrap();

    let outcome = Bootstrap::new(base).with_override(fixed).run().await;

    assert!(outcome.is_success(), "{:?}", outcome.error);
    assert_eq!(log.count("app:start"), 1);
}

#[tokio::test]
async fn test_application_resolved_from_custom_capability() {
    let log = EventLog::new();
    let app = ScriptedApplication::new(&log);
    let base = BindingSet::builder("base")
        .bind("service", app.descriptor(&[]))
        .bind_instance("unused", "Unused", Component::new(Arc::new(())))
        .build()
        .unwrap();

    let outcome = Bootstrap::new(base).with_application("service").run().await;

    assert!(outcome.is_success());
    assert_eq!(log.entries(), vec!["app:start", "app:stop"]);
}

#[tokio::test]
async fn test_wrong_type_under_application_capability() {
    let base = BindingSet::builder("base")
        .bind(
            APPLICATION,
            ImplementationDescriptor::instance("NotAnApp", Component::new(Arc::new(42_u8))),
        )
        .build()
        .unwrap();

    let outcome = Bootstrap::new(base).run().await;

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(outcome.error, Some(Error::ComponentType { .. })));
}
