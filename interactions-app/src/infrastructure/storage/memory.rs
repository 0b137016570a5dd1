use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use interactions_errors::StoreError;

use super::{ChangeListener, KeyValueStorage, StorageChange, StorageSubscription};

/// In-memory storage backend. Cloning (or sharing the `Arc<dyn ...>` handle)
/// models several tabs on one origin: every write notifies all subscribers,
/// the writer's own included.
#[derive(Clone)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
    listeners: Arc<DashMap<u64, ChangeListener>>,
    next_listener_id: Arc<AtomicU64>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            listeners: Arc::new(DashMap::new()),
            next_listener_id: Arc::new(AtomicU64::new(0)),
        }
    }

    fn notify(&self, key: &str, new_value: Option<&str>) {
        let change = StorageChange {
            key: key.to_owned(),
            new_value: new_value.map(str::to_owned),
        };
        // Snapshot the listeners first so a callback may itself write back
        // into storage.
        let listeners: Vec<ChangeListener> = self
            .listeners
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        for listener in listeners {
            listener(&change);
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.notify(key, Some(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.notify(key, None);
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    fn subscribe_to_changes(&self, listener: ChangeListener) -> StorageSubscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.insert(id, listener);

        let listeners = Arc::downgrade(&self.listeners);
        StorageSubscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.remove(&id);
            }
        })
    }
}
