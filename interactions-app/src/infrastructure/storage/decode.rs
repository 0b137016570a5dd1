//! Fail-open reads of persisted values. Anything absent or malformed resolves
//! to the type-appropriate default instead of an error; the interaction data
//! is not worth failing a page over.

use serde::de::DeserializeOwned;

/// Outcome of reading a persisted value: the stored value, or the default
/// when the entry was absent or malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Stored(T),
    Fallback(T),
}

impl<T> Decoded<T> {
    pub fn into_value(self) -> T {
        match self {
            Decoded::Stored(value) | Decoded::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Decoded::Fallback(_))
    }
}

/// Parse a stored JSON value.
pub fn json_or<T: DeserializeOwned>(key: &str, raw: Option<String>, default: T) -> Decoded<T> {
    match raw {
        None => Decoded::Fallback(default),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Decoded::Stored(value),
            Err(err) => {
                tracing::warn!("discarding malformed value under {}: {}", key, err);
                Decoded::Fallback(default)
            }
        },
    }
}

/// Parse a stored decimal counter.
pub fn counter(key: &str, raw: Option<String>) -> Decoded<u64> {
    match raw {
        None => Decoded::Fallback(0),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(count) => Decoded::Stored(count),
            Err(_) => {
                tracing::warn!("discarding non-numeric counter under {}", key);
                Decoded::Fallback(0)
            }
        },
    }
}
