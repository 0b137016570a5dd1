use serde::{Deserialize, Serialize};

/// Name shown for visitors who never picked one.
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous User";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub display_name: String,
}
