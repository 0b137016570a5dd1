use std::sync::Arc;

use interactions_errors::StoreError;

/// A single key changing in the underlying store. `new_value` is `None` when
/// the key was removed.
#[derive(Debug, Clone)]
pub struct StorageChange {
    pub key: String,
    pub new_value: Option<String>,
}

pub type ChangeListener = Arc<dyn Fn(&StorageChange) + Send + Sync>;

/// The per-origin key-value space the ledgers persist into, abstracted so the
/// same logic runs against browser storage in a host page and against an
/// in-memory backend in tests and headless embeddings.
///
/// Reads are infallible and fail open; writes surface backend errors (quota,
/// disabled storage) to the caller.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Every key currently present.
    fn keys(&self) -> Vec<String>;

    /// Register for change notifications. The listener stays active until the
    /// returned subscription is dropped.
    fn subscribe_to_changes(&self, listener: ChangeListener) -> StorageSubscription;
}

/// Detaches its listener when dropped.
pub struct StorageSubscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl StorageSubscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for StorageSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
