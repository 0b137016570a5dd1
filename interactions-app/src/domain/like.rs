use serde::{Deserialize, Serialize};

/// Result of a like toggle operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResult {
    pub liked: bool,
    pub count: u64,
}
