//! Lock-guarded in-memory post store.
//!
//! Posts live only for the process lifetime. The whole map sits behind one
//! `RwLock`: reads share, and `update` holds the write guard across the
//! edit-window check and the mutation so the two cannot be interleaved.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{PostStore, PostStoreError};
use crate::domain::post::{Post, PostChanges, PostId};

/// Keyed post collection shared across handlers.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    inner: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostStore {
    /// Build an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<PostId, Post>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<PostId, Post>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<(), PostStoreError> {
        self.write().insert(post.id, post);
        Ok(())
    }

    async fn update(
        &self,
        id: &PostId,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> Result<Post, PostStoreError> {
        let mut posts = self.write();
        let post = posts.get_mut(id).ok_or(PostStoreError::NotFound)?;
        if !post.apply_changes(changes, now) {
            return Err(PostStoreError::EditWindowExpired);
        }
        Ok(post.clone())
    }

    async fn remove(&self, id: &PostId) -> Result<(), PostStoreError> {
        self.write()
            .remove(id)
            .map(|_| ())
            .ok_or(PostStoreError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Post>, PostStoreError> {
        let mut posts: Vec<Post> = self.read().values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
