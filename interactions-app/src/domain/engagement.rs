use serde::{Deserialize, Serialize};

use super::Comment;

/// Everything the engagement UI needs to render one post's footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInteractions {
    pub likes: u64,
    pub comments: Vec<Comment>,
    pub user_has_liked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementTotals {
    pub total_likes: u64,
    pub total_comments: u64,
}
