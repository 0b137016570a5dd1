use std::sync::Arc;

use crate::application::Engagement;
use crate::domain::PostInteractions;
use crate::infrastructure::ledgers::IdentityStore;
use crate::infrastructure::storage::{keys, KeyValueStorage, StorageSubscription};

/// Re-reads a post's snapshot whenever some tab writes one of its keys, so
/// every open view of the post converges on the same state. Convergence is
/// eventual: a tab shows stale data until its own notification lands.
#[derive(Clone)]
pub struct SyncBridge {
    storage: Arc<dyn KeyValueStorage>,
    identity: IdentityStore,
    engagement: Engagement,
}

impl SyncBridge {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        identity: IdentityStore,
        engagement: Engagement,
    ) -> Self {
        Self {
            storage,
            identity,
            engagement,
        }
    }

    /// Watch one post. Each matching storage change triggers a fresh snapshot
    /// pushed to `on_change`; there is no debounce, writes are human-paced.
    /// Dropping the returned subscription stops the callbacks.
    pub fn watch_post(
        &self,
        post_id: &str,
        on_change: impl Fn(PostInteractions) + Send + Sync + 'static,
    ) -> StorageSubscription {
        let like_key = keys::like_count(post_id);
        let comments_key = keys::comments(post_id);
        // The id may not exist yet at watch time; match any liked-set key
        // until it does.
        let user_likes_key = self.identity.existing_user_id().map(|id| keys::user_likes(&id));

        let engagement = self.engagement.clone();
        let post_id = post_id.to_owned();

        self.storage.subscribe_to_changes(Arc::new(move |change| {
            let relevant = change.key == like_key
                || change.key == comments_key
                || match &user_likes_key {
                    Some(key) => change.key == *key,
                    None => change.key.starts_with(keys::USER_LIKES_PREFIX),
                };

            if relevant {
                tracing::debug!("change under {}, re-reading {}", change.key, post_id);
                on_change(engagement.for_post(&post_id));
            }
        }))
    }
}
