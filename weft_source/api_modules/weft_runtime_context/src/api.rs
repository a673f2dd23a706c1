use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::sub_apis::{EventBus, ResourceLoader, ServiceSlot};

/// Application-wide services, created once at startup and passed by reference.
pub struct AppContext {
    project_root: PathBuf,
    events: ServiceSlot<Mutex<EventBus>>,
    resources: ServiceSlot<Mutex<ResourceLoader>>,
}

impl AppContext {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            events: ServiceSlot::new(),
            resources: ServiceSlot::new(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn events(&self) -> Arc<Mutex<EventBus>> {
        self.events.get_or_init(|| {
            log::debug!("event bus created");
            Mutex::new(EventBus::new())
        })
    }

    pub fn resources(&self) -> Arc<Mutex<ResourceLoader>> {
        self.resources.get_or_init(|| {
            log::debug!("resource loader created at {}", self.project_root.display());
            Mutex::new(ResourceLoader::new(self.project_root.clone()))
        })
    }

    /// Runs `f` with the event bus locked.
    pub fn with_events<V>(&self, f: impl FnOnce(&mut EventBus) -> V) -> V {
        let events = self.events();
        let mut guard = events.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Runs `f` with the resource loader locked.
    pub fn with_resources<V>(&self, f: impl FnOnce(&mut ResourceLoader) -> V) -> V {
        let resources = self.resources();
        let mut guard = resources.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Drops every service. Later accesses build fresh instances.
    pub fn teardown(&self) {
        self.events.teardown();
        self.resources.teardown();
    }
}
