use std::sync::Arc;

use interactions_errors::StoreError;

use super::IdentityStore;
use crate::domain::Comment;
use crate::infrastructure::storage::{decode, keys, KeyValueStorage};

#[derive(Clone)]
pub struct CommentLedger {
    storage: Arc<dyn KeyValueStorage>,
    identity: IdentityStore,
}

impl CommentLedger {
    pub fn new(storage: Arc<dyn KeyValueStorage>, identity: IdentityStore) -> Self {
        Self { storage, identity }
    }

    /// Comments for a post in the order they were added.
    pub fn list(&self, post_id: &str) -> Vec<Comment> {
        let key = keys::comments(post_id);
        decode::json_or(&key, self.storage.get(&key), Vec::new()).into_value()
    }

    /// Append a comment and return the created record. The author defaults to
    /// the current display name.
    pub fn add(
        &self,
        post_id: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Comment, StoreError> {
        let author = match author {
            Some(name) => name.to_owned(),
            None => self.identity.display_name(),
        };
        let comment = Comment::new(author, content.to_owned());

        let mut comments = self.list(post_id);
        comments.push(comment.clone());
        self.write_comments(post_id, &comments)?;
        Ok(comment)
    }

    /// Remove a comment if it exists and was authored under the caller's
    /// *current* display name. `Ok(false)` means not found or not yours.
    /// Renaming yourself to an author's name does grant delete rights; that
    /// is the authorization model of a zero-registration comment box.
    pub fn delete(&self, post_id: &str, comment_id: &str) -> Result<bool, StoreError> {
        let mut comments = self.list(post_id);
        let caller = self.identity.display_name();

        let index = match comments
            .iter()
            .position(|c| c.id == comment_id && c.author == caller)
        {
            Some(index) => index,
            None => return Ok(false),
        };

        comments.remove(index);
        self.write_comments(post_id, &comments)?;
        Ok(true)
    }

    fn write_comments(&self, post_id: &str, comments: &[Comment]) -> Result<(), StoreError> {
        let key = keys::comments(post_id);
        let encoded = serde_json::to_string(comments)
            .map_err(|err| StoreError::Encoding(key.clone(), err.to_string()))?;
        self.storage.set(&key, &encoded)
    }
}
