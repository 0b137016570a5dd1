use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum StoreError {
    #[error("storage quota exceeded while writing {0}")]
    QuotaExceeded(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("could not encode value for {0}: {1}")]
    Encoding(String, String),
}

impl StoreError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::QuotaExceeded(_) => {
                "Browser storage is full, so likes and comments are paused for now."
            }
            Self::Unavailable(_) => {
                "Browser storage is disabled, so likes and comments won't be saved."
            }
            Self::Encoding(_, _) => "Something went wrong while saving. Please try again.",
        }
    }
}
