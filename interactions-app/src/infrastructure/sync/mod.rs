mod bridge;

pub use bridge::SyncBridge;
