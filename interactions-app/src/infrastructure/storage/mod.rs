pub mod decode;
pub mod keys;

mod key_value;
mod memory;

pub use key_value::{ChangeListener, KeyValueStorage, StorageChange, StorageSubscription};
pub use memory::MemoryStorage;
