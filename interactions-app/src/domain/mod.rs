mod comment;
mod engagement;
mod identity;
mod like;

pub use comment::Comment;
pub use engagement::{EngagementTotals, PostInteractions};
pub use identity::{UserIdentity, DEFAULT_DISPLAY_NAME};
pub use like::LikeResult;
