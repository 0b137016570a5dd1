use std::sync::Arc;

use interactions_errors::StoreError;

use super::IdentityStore;
use crate::domain::LikeResult;
use crate::infrastructure::storage::{decode, keys, KeyValueStorage};

#[derive(Clone)]
pub struct LikeLedger {
    storage: Arc<dyn KeyValueStorage>,
    identity: IdentityStore,
}

impl LikeLedger {
    pub fn new(storage: Arc<dyn KeyValueStorage>, identity: IdentityStore) -> Self {
        Self { storage, identity }
    }

    /// Shared like counter for a post, zero when absent or unparsable.
    pub fn count(&self, post_id: &str) -> u64 {
        let key = keys::like_count(post_id);
        decode::counter(&key, self.storage.get(&key)).into_value()
    }

    /// Whether the current user has liked the post. Without a persisted
    /// identity nothing can have been liked.
    pub fn has_liked(&self, post_id: &str) -> bool {
        match self.identity.existing_user_id() {
            Some(user_id) => self.liked_posts(&user_id).iter().any(|p| p == post_id),
            None => false,
        }
    }

    /// Flip the current user's like and adjust the shared counter, clamped at
    /// zero. The counter and the membership set are two plain writes; across
    /// tabs the last writer wins at each key.
    pub fn toggle(&self, post_id: &str) -> Result<LikeResult, StoreError> {
        let user_id = self.identity.user_id()?;
        let count = self.count(post_id);
        let mut liked_posts = self.liked_posts(&user_id);

        let result = match liked_posts.iter().position(|p| p == post_id) {
            Some(index) => {
                liked_posts.remove(index);
                LikeResult {
                    liked: false,
                    count: count.saturating_sub(1),
                }
            }
            None => {
                liked_posts.push(post_id.to_owned());
                LikeResult {
                    liked: true,
                    count: count.saturating_add(1),
                }
            }
        };

        self.storage
            .set(&keys::like_count(post_id), &result.count.to_string())?;
        self.write_liked_posts(&user_id, &liked_posts)?;
        Ok(result)
    }

    fn liked_posts(&self, user_id: &str) -> Vec<String> {
        let key = keys::user_likes(user_id);
        decode::json_or(&key, self.storage.get(&key), Vec::new()).into_value()
    }

    fn write_liked_posts(&self, user_id: &str, posts: &[String]) -> Result<(), StoreError> {
        let key = keys::user_likes(user_id);
        let encoded = serde_json::to_string(posts)
            .map_err(|err| StoreError::Encoding(key.clone(), err.to_string()))?;
        self.storage.set(&key, &encoded)
    }
}
