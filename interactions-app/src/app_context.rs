use std::sync::Arc;

use crate::application::Engagement;
use crate::infrastructure::ledgers::{CommentLedger, IdentityStore, LikeLedger};
use crate::infrastructure::storage::{KeyValueStorage, MemoryStorage};
use crate::infrastructure::sync::SyncBridge;

/// One fully wired interaction store over a shared storage backend. Clones
/// share the backend, so a context is cheap to hand to every widget.
#[derive(Clone)]
pub struct AppContext {
    pub identity: IdentityStore,
    pub likes: LikeLedger,
    pub comments: CommentLedger,
    pub engagement: Engagement,
    pub sync: SyncBridge,
}

impl AppContext {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let identity = IdentityStore::new(storage.clone());
        let likes = LikeLedger::new(storage.clone(), identity.clone());
        let comments = CommentLedger::new(storage.clone(), identity.clone());
        let engagement = Engagement::new(storage.clone(), likes.clone(), comments.clone());
        let sync = SyncBridge::new(storage, identity.clone(), engagement.clone());

        Self {
            identity,
            likes,
            comments,
            engagement,
            sync,
        }
    }

    /// Context over a private in-memory backend, for tests and headless use.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }
}
