use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lazily constructed shared service. Constructed at most once until `teardown`.
pub struct ServiceSlot<T> {
    inner: RwLock<Option<Arc<T>>>,
}

impl<T> Default for ServiceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ServiceSlot<T> {
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    // A panic inside `init` poisons the lock but leaves the slot empty,
    // so the guard is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<T>>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<T>>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.read().clone()
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        if let Some(existing) = self.read().as_ref() {
            return Arc::clone(existing);
        }
        let mut slot = self.write();
        if let Some(existing) = slot.as_ref() {
            return Arc::clone(existing);
        }
        let created = Arc::new(init());
        *slot = Some(Arc::clone(&created));
        created
    }

    pub fn is_initialized(&self) -> bool {
        self.read().is_some()
    }

    /// Drops the slot's reference. Outstanding `Arc`s stay valid; the next
    /// access constructs a fresh instance.
    pub fn teardown(&self) -> Option<Arc<T>> {
        self.write().take()
    }
}
