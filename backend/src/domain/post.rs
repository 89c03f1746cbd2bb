//! News post aggregate and the edit-window policy.
//!
//! All timestamps are UTC. The original deployment mixed naive local time
//! with UTC across its two edit-window variants; this implementation
//! normalises to UTC and treats every input timestamp as already UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fixed interval after creation during which a post remains mutable.
pub const EDIT_WINDOW: Duration = Duration::hours(2);

/// Return whether a post created at `created_at` is still editable at `now`.
///
/// The boundary is inclusive: exactly two hours after creation is editable,
/// one second later is not.
///
/// # Examples
/// ```
/// use backend::domain::{is_editable, EDIT_WINDOW};
/// use chrono::Utc;
///
/// let created = Utc::now();
/// assert!(is_editable(created, created + EDIT_WINDOW));
/// ```
pub fn is_editable(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - created_at <= EDIT_WINDOW
}

/// Opaque post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Error returned when a category string is not in the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown post category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

/// Fixed post category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Finance,
    Healthcare,
    Achievement,
    Notice,
    Urgent,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Finance,
        Self::Healthcare,
        Self::Achievement,
        Self::Notice,
        Self::Urgent,
    ];

    /// Wire/display name for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Achievement => "Achievement",
            Self::Notice => "Notice",
            Self::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

/// Validation errors returned by [`PostDraft::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostDraftValidationError {
    /// Neither headline, description, nor any image was supplied.
    EmptyPost,
}

impl fmt::Display for PostDraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPost => {
                write!(f, "post must have at least a headline, description, or image")
            }
        }
    }
}

impl std::error::Error for PostDraftValidationError {}

/// Validated content for a new or edited post, before image upload.
///
/// ## Invariants
/// - At least one of headline, description, or `image_count` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Headline text, possibly empty.
    pub headline: String,
    /// Body text, possibly empty.
    pub description: String,
    /// Category, absent when the author picked none.
    pub category: Option<Category>,
}

impl PostDraft {
    /// Validate draft content against the at-least-one-field rule.
    ///
    /// `image_count` is the number of files submitted alongside the text
    /// fields; images alone make a valid post.
    pub fn try_new(
        headline: String,
        description: String,
        category: Option<Category>,
        image_count: usize,
    ) -> Result<Self, PostDraftValidationError> {
        if headline.is_empty() && description.is_empty() && image_count == 0 {
            return Err(PostDraftValidationError::EmptyPost);
        }
        Ok(Self {
            headline,
            description,
            category,
        })
    }
}

/// Field changes applied to an existing post inside the edit window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    /// Replacement headline.
    pub headline: String,
    /// Replacement description.
    pub description: String,
    /// New category; `None` leaves the stored category untouched.
    pub category: Option<Category>,
    /// Replacement image URLs; `None` keeps the stored list.
    pub image_urls: Option<Vec<String>>,
}

/// A published announcement post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque unique identifier.
    pub id: PostId,
    /// Headline text, possibly empty.
    pub headline: String,
    /// Body text, possibly empty.
    pub description: String,
    /// Hosted image URLs in submission order.
    pub image_urls: Vec<String>,
    /// Category, absent when the author picked none.
    pub category: Option<Category>,
    /// Display name of the authenticated author.
    pub author: String,
    /// Creation timestamp (UTC); anchors the edit window.
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp (UTC), if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Publish a draft under a fresh identifier.
    pub fn publish(
        draft: PostDraft,
        image_urls: Vec<String>,
        author: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PostId::random(),
            headline: draft.headline,
            description: draft.description,
            image_urls,
            category: draft.category,
            author,
            created_at: now,
            updated_at: None,
        }
    }

    /// Apply edit-window-gated changes in place.
    ///
    /// Returns `false` without touching the post when the window has
    /// expired. Callers must invoke this atomically with storage so no
    /// mutation can land after expiry.
    pub fn apply_changes(&mut self, changes: PostChanges, now: DateTime<Utc>) -> bool {
        if !is_editable(self.created_at, now) {
            return false;
        }
        let PostChanges {
            headline,
            description,
            category,
            image_urls,
        } = changes;
        self.headline = headline;
        self.description = description;
        if let Some(category) = category {
            self.category = Some(category);
        }
        if let Some(image_urls) = image_urls {
            self.image_urls = image_urls;
        }
        self.updated_at = Some(now);
        true
    }
}
