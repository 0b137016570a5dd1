use std::sync::Arc;

use crate::domain::{Comment, EngagementTotals, PostInteractions};
use crate::infrastructure::ledgers::{CommentLedger, LikeLedger};
use crate::infrastructure::storage::{decode, keys, KeyValueStorage};

/// Read-side aggregation over the ledgers: per-post snapshots for the
/// engagement UI plus whole-store totals.
#[derive(Clone)]
pub struct Engagement {
    storage: Arc<dyn KeyValueStorage>,
    likes: LikeLedger,
    comments: CommentLedger,
}

impl Engagement {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        likes: LikeLedger,
        comments: CommentLedger,
    ) -> Self {
        Self {
            storage,
            likes,
            comments,
        }
    }

    /// Snapshot of one post. A post never written to reads as zero likes, no
    /// comments, not liked.
    pub fn for_post(&self, post_id: &str) -> PostInteractions {
        PostInteractions {
            likes: self.likes.count(post_id),
            comments: self.comments.list(post_id),
            user_has_liked: self.likes.has_liked(post_id),
        }
    }

    /// Sum likes and comments across every post this store has seen. Scans
    /// all stored keys, which is fine at blog scale.
    pub fn totals(&self) -> EngagementTotals {
        let mut totals = EngagementTotals::default();

        for key in self.storage.keys() {
            if key.starts_with(keys::LIKE_COUNT_PREFIX) {
                totals.total_likes += decode::counter(&key, self.storage.get(&key)).into_value();
            } else if key.starts_with(keys::COMMENTS_PREFIX) {
                let comments: Vec<Comment> =
                    decode::json_or(&key, self.storage.get(&key), Vec::new()).into_value();
                totals.total_comments += comments.len() as u64;
            }
        }

        totals
    }
}
