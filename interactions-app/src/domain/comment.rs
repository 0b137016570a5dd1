use serde::{Deserialize, Serialize};

/// A single blog comment. The post it belongs to is carried by the storage
/// key, not the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Comment {
    pub fn new(author: String, content: String) -> Self {
        Self {
            id: generate_id(),
            author,
            content,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Creation time in unix millis plus a random suffix. Unique enough for a
/// single browser profile.
fn generate_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), &suffix[..8])
}
