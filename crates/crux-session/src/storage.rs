//! Persistent key-value storage abstraction
//!
//! Models the origin-scoped storage the store persists into:
//! synchronous string get/set/remove, survives reloads, no cross-tab
//! locking. Concurrent writers race with last-writer-wins; the store
//! accepts that.

use std::collections::HashMap;

use parking_lot::Mutex;

/// Synchronous string key-value storage
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage, for tests and embedders without a durable
/// substrate
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
