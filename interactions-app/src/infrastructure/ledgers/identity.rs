use std::sync::Arc;

use interactions_errors::StoreError;
use uuid::Uuid;

use crate::domain::{UserIdentity, DEFAULT_DISPLAY_NAME};
use crate::infrastructure::storage::{keys, KeyValueStorage};

#[derive(Clone)]
pub struct IdentityStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Stable anonymous id for this browser profile, minted on first use.
    pub fn user_id(&self) -> Result<String, StoreError> {
        if let Some(id) = self.storage.get(keys::USER_ID) {
            return Ok(id);
        }

        let id = Uuid::new_v4().to_string();
        self.storage.set(keys::USER_ID, &id)?;
        tracing::debug!("minted anonymous user id");
        Ok(id)
    }

    /// Read-only lookup; `None` until some operation has minted an id. Pure
    /// reads go through this so they never write.
    pub fn existing_user_id(&self) -> Option<String> {
        self.storage.get(keys::USER_ID)
    }

    pub fn display_name(&self) -> String {
        self.storage
            .get(keys::USER_NAME)
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
    }

    /// Persists the trimmed name. Callers enforce non-empty.
    pub fn set_display_name(&self, name: &str) -> Result<(), StoreError> {
        self.storage.set(keys::USER_NAME, name.trim())
    }

    pub fn current(&self) -> Result<UserIdentity, StoreError> {
        Ok(UserIdentity {
            user_id: self.user_id()?,
            display_name: self.display_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;

    fn store() -> IdentityStore {
        IdentityStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_user_id_is_stable_across_calls() {
        let identity = store();
        let first = identity.user_id().unwrap();
        let second = identity.user_id().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_id_exists_before_first_use() {
        let identity = store();
        assert!(identity.existing_user_id().is_none());

        identity.user_id().unwrap();
        assert!(identity.existing_user_id().is_some());
    }

    #[test]
    fn test_display_name_defaults() {
        let identity = store();
        assert_eq!(identity.display_name(), DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn test_set_display_name_trims() {
        let identity = store();
        identity.set_display_name("  Alice  ").unwrap();
        assert_eq!(identity.display_name(), "Alice");
    }
}
