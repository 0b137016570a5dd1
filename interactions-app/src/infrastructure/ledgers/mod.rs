mod comments;
mod identity;
mod likes;

pub use comments::CommentLedger;
pub use identity::IdentityStore;
pub use likes::LikeLedger;
