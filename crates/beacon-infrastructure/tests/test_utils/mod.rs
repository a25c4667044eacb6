//! Shared fixtures: components and applications that record what happens to them

#![allow(dead_code)]

use async_trait::async_trait;
use beacon_domain::error::{Error, Result};
use beacon_domain::ports::{Application, LifecycleManaged};
use beacon_domain::value_objects::{Capability, Component, ImplementationDescriptor};
use std::sync::{Arc, Mutex};

/// Ordered record of hook and application calls
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|e| *e == entry).count()
    }
}

/// How a recorded hook behaves
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum Behavior {
    #[default]
    Succeed,
    Fail,
    Panic,
    /// Never completes
    Hang,
}

/// Lifecycle hook writing `init:<name>` and `stop:<name>` to the log
pub struct RecordingHook {
    name: String,
    log: EventLog,
    init: Behavior,
    stop: Behavior,
}

impl RecordingHook {
    pub fn new(name: &str, log: &EventLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            init: Behavior::Succeed,
            stop: Behavior::Succeed,
        }
    }

    pub fn with_init(mut self, behavior: Behavior) -> Self {
        self.init = behavior;
        self
    }

    pub fn with_stop(mut self, behavior: Behavior) -> Self {
        self.stop = behavior;
        self
    }

    pub fn shared(self) -> Option<Arc<dyn LifecycleManaged>> {
        Some(Arc::new(self))
    }
}

fn act(behavior: Behavior, what: &str) -> Result<()> {
    match behavior {
        Behavior::Succeed | Behavior::Hang => Ok(()),
        Behavior::Fail => Err(Error::internal(format!("{what} failed on purpose"))),
        Behavior::Panic => panic!("{what} panicked on purpose"),
    }
}

#[async_trait]
impl LifecycleManaged for RecordingHook {
    async fn init(&self) -> Result<()> {
        self.log.push(format!("init:{}", self.name));
        if self.init == Behavior::Hang {
            std::future::pending::<()>().await;
        }
        act(self.init, &format!("init of {}", self.name))
    }

    async fn stop(&self) -> Result<()> {
        self.log.push(format!("stop:{}", self.name));
        act(self.stop, &format!("stop of {}", self.name))
    }
}

/// Singleton descriptor whose component carries a [`RecordingHook`]
pub fn managed(name: &'static str, log: &EventLog, deps: &[&'static str]) -> ImplementationDescriptor {
    managed_with(name, log, deps, Behavior::Succeed)
}

/// Like [`managed`] with a chosen init behavior
pub fn managed_with(
    name: &'static str,
    log: &EventLog,
    deps: &[&'static str],
    init: Behavior,
) -> ImplementationDescriptor {
    let log = log.clone();
    let descriptor = ImplementationDescriptor::new(name, move |_| {
        log.push(format!("construct:{name}"));
        let hook = Arc::new(RecordingHook::new(name, &log).with_init(init));
        Ok(Component::new(Arc::new(name.to_string())).with_lifecycle(hook))
    });
    deps.iter()
        .fold(descriptor, |d, &dep| d.depends_on(Capability::from_static(dep)))
}

/// Application writing `app:start` and `app:stop` to the log
pub struct ScriptedApplication {
    log: EventLog,
    start: Behavior,
    stop: Behavior,
}

impl ScriptedApplication {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            start: Behavior::Succeed,
            stop: Behavior::Succeed,
        }
    }

    pub fn with_start(mut self, behavior: Behavior) -> Self {
        self.start = behavior;
        self
    }

    pub fn with_stop(mut self, behavior: Behavior) -> Self {
        self.stop = behavior;
        self
    }

    /// Descriptor binding this application, optionally depending on components
    pub fn descriptor(self, deps: &[&'static str]) -> ImplementationDescriptor {
        let app: Arc<dyn Application> = Arc::new(self);
        deps.iter().fold(
            ImplementationDescriptor::instance("ScriptedApplication", Component::new(app)),
            |d, &dep| d.depends_on(Capability::from_static(dep)),
        )
    }
}

#[async_trait]
impl Application for ScriptedApplication {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn start(&self) -> Result<()> {
        self.log.push("app:start");
        act(self.start, "application start")
    }

    async fn stop(&self) -> Result<()> {
        self.log.push("app:stop");
        act(self.stop, "application stop")
    }
}
