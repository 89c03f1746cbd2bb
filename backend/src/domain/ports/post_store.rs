//! Driven port for post persistence.
//!
//! The store is an explicitly injected, lock-guarded collection rather than
//! a process global, so lifecycle and concurrency discipline stay visible at
//! the boundary. `update` runs the edit-window-gated mutation atomically so
//! no change can land on a post after its window expires.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::post::{Post, PostChanges, PostId};

/// Errors surfaced by post storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostStoreError {
    /// No post with the given identifier.
    #[error("post not found")]
    NotFound,
    /// The post exists but its edit window has expired.
    #[error("edit window expired")]
    EditWindowExpired,
}

/// Port for the keyed post collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a freshly published post.
    async fn insert(&self, post: Post) -> Result<(), PostStoreError>;

    /// Apply changes to one post, atomically with the edit-window check.
    ///
    /// Returns the updated post. Mutations to distinct posts may proceed in
    /// parallel; concurrent updates of the same post are serialized.
    async fn update(
        &self,
        id: &PostId,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> Result<Post, PostStoreError>;

    /// Delete one post; never gated by the edit window.
    async fn remove(&self, id: &PostId) -> Result<(), PostStoreError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, PostStoreError>;
}
