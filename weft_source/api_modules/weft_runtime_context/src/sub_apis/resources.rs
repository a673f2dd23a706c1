use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type LoadCallback = Box<dyn FnOnce(Arc<Vec<u8>>) + Send>;

/// Byte loader rooted at a directory. Loaded files are cached by path.
pub struct ResourceLoader {
    root: PathBuf,
    cache: HashMap<PathBuf, Arc<Vec<u8>>>,
    pending: VecDeque<(PathBuf, LoadCallback)>,
}

impl ResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.replace('\\', "/"))
    }

    pub fn load(&mut self, path: &str) -> Option<Arc<Vec<u8>>> {
        let full = self.resolve(path);
        if let Some(bytes) = self.cache.get(&full) {
            return Some(Arc::clone(bytes));
        }
        match fs::read(&full) {
            Ok(bytes) => {
                let bytes = Arc::new(bytes);
                self.cache.insert(full, Arc::clone(&bytes));
                Some(bytes)
            }
            Err(e) => {
                log::error!("resource '{path}' not found at {}: {e}", full.display());
                None
            }
        }
    }

    /// Queues a load; `pump` completes it.
    pub fn load_async(&mut self, path: &str, callback: impl FnOnce(Arc<Vec<u8>>) + Send + 'static) {
        self.pending
            .push_back((PathBuf::from(path), Box::new(callback)));
    }

    /// One cooperative step: completes every queued load. Callbacks run only
    /// for loads that produced bytes. Returns how many requests were processed.
    pub fn pump(&mut self) -> usize {
        let queued: Vec<_> = self.pending.drain(..).collect();
        let count = queued.len();
        for (path, callback) in queued {
            let key = path.to_string_lossy().into_owned();
            match self.load(&key) {
                Some(bytes) => callback(bytes),
                None => log::warn!("async load of '{key}' skipped"),
            }
        }
        count
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn evict(&mut self, path: &str) -> bool {
        let full = self.resolve(path);
        self.cache.remove(&full).is_some()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
