//! Post lifecycle use-cases: publish, edit, delete, list.
//!
//! Image uploads fan out before the store is touched. A failed upload drops
//! that one image rather than failing the whole submission; the failure is
//! logged with the file name.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::error::Error;
use crate::domain::ports::{
    ImageStore, ImageUpload, PostService, PostStore, PostStoreError, PostSubmission,
};
use crate::domain::post::{Post, PostChanges, PostDraft, PostId};

/// News Post Service wiring validation, image hosting, and storage together.
#[derive(Clone)]
pub struct NewsPostService<S, I> {
    store: Arc<S>,
    images: Arc<I>,
}

impl<S, I> NewsPostService<S, I>
where
    I: ImageStore,
{
    /// Build the service over the given store and image host.
    pub fn new(store: Arc<S>, images: Arc<I>) -> Self {
        Self { store, images }
    }

    /// Upload each image in order, skipping individual failures.
    async fn upload_images(&self, images: Vec<ImageUpload>) -> Vec<String> {
        let mut urls = Vec::with_capacity(images.len());
        for image in &images {
            match self.images.upload(image).await {
                Ok(url) => urls.push(url),
                Err(err) => {
                    warn!(
                        file_name = image.file_name.as_deref().unwrap_or("<unnamed>"),
                        error = %err,
                        "image upload failed; continuing without it"
                    );
                }
            }
        }
        urls
    }

    fn validate(submission: &PostSubmission) -> Result<PostDraft, Error> {
        PostDraft::try_new(
            submission.headline.clone(),
            submission.description.clone(),
            submission.category,
            submission.images.len(),
        )
        .map_err(|err| Error::invalid_request(err.to_string()))
    }

    fn map_store_error(err: PostStoreError) -> Error {
        match err {
            PostStoreError::NotFound => Error::not_found("Post not found"),
            PostStoreError::EditWindowExpired => {
                Error::forbidden("Posts can only be edited within 2 hours of creation")
            }
        }
    }
}

#[async_trait]
impl<S, I> PostService for NewsPostService<S, I>
where
    S: PostStore,
    I: ImageStore,
{
    async fn create(&self, submission: PostSubmission, author: &str) -> Result<Post, Error> {
        let draft = Self::validate(&submission)?;
        let image_urls = self.upload_images(submission.images).await;
        let post = Post::publish(draft, image_urls, author.to_owned(), Utc::now());
        let id = post.id;
        self.store
            .insert(post.clone())
            .await
            .map_err(Self::map_store_error)?;
        info!(post_id = %id, author, "post published");
        Ok(post)
    }

    async fn edit(&self, id: &PostId, submission: PostSubmission) -> Result<Post, Error> {
        let draft = Self::validate(&submission)?;
        // Only replace the stored image list when the edit carried new files.
        let image_urls = if submission.images.is_empty() {
            None
        } else {
            Some(self.upload_images(submission.images).await)
        };
        let changes = PostChanges {
            headline: draft.headline,
            description: draft.description,
            category: draft.category,
            image_urls,
        };
        let post = self
            .store
            .update(id, changes, Utc::now())
            .await
            .map_err(Self::map_store_error)?;
        info!(post_id = %id, "post edited");
        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), Error> {
        self.store
            .remove(id)
            .await
            .map_err(Self::map_store_error)?;
        info!(post_id = %id, "post deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, Error> {
        self.store.list().await.map_err(Self::map_store_error)
    }
}
