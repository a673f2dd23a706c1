pub mod api;
pub mod sub_apis;

pub use api::AppContext;

pub mod prelude {
    pub use crate::api::AppContext;
    pub use crate::sub_apis::{EventBus, EventHandler, LoadCallback, ResourceLoader, ServiceSlot};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // -------------------- ServiceSlot --------------------

    #[test]
    fn slot_constructs_once_under_contention() {
        let slot: ServiceSlot<String> = ServiceSlot::new();
        let calls = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    slot.get_or_init(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        "svc".to_string()
                    });
                });
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(slot.get().unwrap().as_str(), "svc");
    }

    #[test]
    fn teardown_allows_reconstruction() {
        let slot = ServiceSlot::new();
        let first = slot.get_or_init(|| 1);
        assert!(slot.teardown().is_some());
        assert!(!slot.is_initialized());
        let second = slot.get_or_init(|| 2);
        assert_eq!((*first, *second), (1, 2));
    }

    // -------------------- EventBus --------------------

    #[test]
    fn listeners_run_in_registration_order() {
        let mut bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let seen = Arc::clone(&seen);
            bus.add_listener("click", move |_| seen.lock().unwrap().push(tag));
        }
        assert_eq!(bus.trigger("click", &()), 3);
        assert_eq!(*seen.lock().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn typed_listener_downcasts_payload() {
        let mut bus = EventBus::new();
        let total = Arc::new(AtomicUsize::new(0));
        let t = Arc::clone(&total);
        bus.add_typed_listener::<usize>("score", move |v| {
            t.fetch_add(*v, Ordering::SeqCst);
        });
        bus.trigger("score", &5usize);
        bus.trigger("score", &"wrong type");
        assert_eq!(total.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn removing_last_listener_removes_event() {
        let mut bus = EventBus::new();
        let a = bus.add_listener("close", |_| {});
        let b = bus.add_listener("close", |_| {});
        assert_ne!(a, b);
        assert!(bus.remove_listener("close", a));
        assert!(bus.has_event("close"));
        assert!(!bus.remove_listener("close", a));
        assert!(bus.remove_listener("close", b));
        assert!(!bus.has_event("close"));
        assert_eq!(bus.trigger("close", &()), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut bus = EventBus::new();
        bus.add_listener("x", |_| {});
        bus.clear();
        assert_eq!(bus.listener_count("x"), 0);
    }

    // -------------------- ResourceLoader --------------------

    #[test]
    fn load_reads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        let mut loader = ResourceLoader::new(dir.path());

        let first = loader.load("a.txt").unwrap();
        std::fs::remove_file(dir.path().join("a.txt")).unwrap();
        let cached = loader.load("a.txt").unwrap();
        assert!(Arc::ptr_eq(&first, &cached));
        assert!(loader.evict("a.txt"));
        assert!(loader.load("a.txt").is_none());
    }

    #[test]
    fn pump_completes_queued_loads_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.bin"), [1u8, 2, 3]).unwrap();
        let mut loader = ResourceLoader::new(dir.path());
        let got = Arc::new(Mutex::new(Vec::new()));

        let g = Arc::clone(&got);
        loader.load_async("b.bin", move |bytes| g.lock().unwrap().push(bytes.len()));
        let g = Arc::clone(&got);
        loader.load_async("missing.bin", move |bytes| g.lock().unwrap().push(bytes.len()));
        assert_eq!(loader.pending(), 2);
        assert!(got.lock().unwrap().is_empty());

        assert_eq!(loader.pump(), 2);
        assert_eq!(loader.pending(), 0);
        assert_eq!(*got.lock().unwrap(), [3]);
    }

    // -------------------- AppContext --------------------

    #[test]
    fn context_services_are_shared_until_teardown() {
        let ctx = AppContext::new(".");
        let a = ctx.events();
        let b = ctx.events();
        assert!(Arc::ptr_eq(&a, &b));
        ctx.with_events(|bus| bus.add_listener("ready", |_| {}));
        assert_eq!(ctx.with_events(|bus| bus.listener_count("ready")), 1);

        ctx.teardown();
        assert_eq!(ctx.with_events(|bus| bus.listener_count("ready")), 0);
        assert!(!Arc::ptr_eq(&a, &ctx.events()));
    }

    #[test]
    fn context_resources_use_project_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("c.txt"), b"x").unwrap();
        let ctx = AppContext::new(dir.path());
        assert_eq!(ctx.with_resources(|r| r.load("c.txt").map(|b| b.len())), Some(1));
    }
}
