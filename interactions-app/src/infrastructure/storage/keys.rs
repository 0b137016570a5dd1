//! String key layout of the persisted store. Post and user ids are embedded
//! in the key; values are bare strings, decimal counters, or JSON arrays.

pub const USER_ID: &str = "blog_user_id";
pub const USER_NAME: &str = "blog_user_name";

pub const LIKE_COUNT_PREFIX: &str = "blog_likes_";
pub const USER_LIKES_PREFIX: &str = "blog_user_likes_";
pub const COMMENTS_PREFIX: &str = "blog_comments_";

pub fn like_count(post_id: &str) -> String {
    format!("{}{}", LIKE_COUNT_PREFIX, post_id)
}

pub fn user_likes(user_id: &str) -> String {
    format!("{}{}", USER_LIKES_PREFIX, user_id)
}

pub fn comments(post_id: &str) -> String {
    format!("{}{}", COMMENTS_PREFIX, post_id)
}
