//! Driving port for post lifecycle use-cases.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::post::{Category, Post, PostId};

use super::image_store::ImageUpload;

/// Raw submission from a post create/edit form, before validation.
#[derive(Debug, Clone, Default)]
pub struct PostSubmission {
    /// Headline text (may be empty).
    pub headline: String,
    /// Body text (may be empty).
    pub description: String,
    /// Category, when the author picked one.
    pub category: Option<Category>,
    /// Uploaded image files in submission order.
    pub images: Vec<ImageUpload>,
}

/// Domain use-case port for creating, editing, deleting, and listing posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostService: Send + Sync {
    /// Publish a new post authored by `author`.
    async fn create(&self, submission: PostSubmission, author: &str) -> Result<Post, Error>;

    /// Edit an existing post inside its edit window.
    async fn edit(&self, id: &PostId, submission: PostSubmission) -> Result<Post, Error>;

    /// Delete a post; allowed at any age.
    async fn delete(&self, id: &PostId) -> Result<(), Error>;

    /// Public feed: all posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, Error>;
}
