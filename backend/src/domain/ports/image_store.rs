//! Driven port for the hosted image service.
//!
//! The hosting integration itself lives outside this core: the port accepts
//! binary content and yields a stable URL. The fixture keeps dev runs and
//! tests deterministic.

use async_trait::async_trait;
use uuid::Uuid;

/// One uploaded file from a multipart post form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Client-supplied file name, if any.
    pub file_name: Option<String>,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Errors surfaced while storing an image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageStoreError {
    /// The hosting service rejected or failed the upload.
    #[error("image upload failed: {message}")]
    Upload { message: String },
}

impl ImageStoreError {
    /// Shorthand constructor for [`ImageStoreError::Upload`].
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }
}

/// Port for persisting post images and obtaining their public URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store one image and return its public URL.
    async fn upload(&self, image: &ImageUpload) -> Result<String, ImageStoreError>;
}

/// Fixture store returning deterministic-shaped fake URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureImageStore;

#[async_trait]
impl ImageStore for FixtureImageStore {
    async fn upload(&self, image: &ImageUpload) -> Result<String, ImageStoreError> {
        if image.bytes.is_empty() {
            return Err(ImageStoreError::upload("empty file"));
        }
        Ok(format!("https://images.invalid/inbrief/{}", Uuid::new_v4()))
    }
}
