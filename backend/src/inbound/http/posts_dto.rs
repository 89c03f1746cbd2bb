//! Wire DTOs for the news feed.
//!
//! The feed keeps the shape the mobile clients already parse: snake_case
//! `image_urls`, a `date` string in `%Y-%m-%d %H:%M:%S`, and the category as
//! its display name.

use serde::Serialize;

use crate::domain::Post;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One feed entry.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct NewsItemDto {
    /// Post identifier.
    pub id: String,
    /// Headline text, possibly empty.
    pub headline: String,
    /// Body text, possibly empty.
    pub description: String,
    /// Hosted image URLs in submission order.
    pub image_urls: Vec<String>,
    /// Publication timestamp, UTC, formatted for the legacy clients.
    pub date: String,
    /// Category display name, if one was picked.
    pub category: Option<String>,
    /// Author display name.
    pub author: String,
}

impl From<Post> for NewsItemDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            headline: post.headline,
            description: post.description,
            image_urls: post.image_urls,
            date: post.created_at.format(DATE_FORMAT).to_string(),
            category: post.category.map(|category| category.as_str().to_owned()),
            author: post.author,
        }
    }
}

/// Acknowledgement wrapper for create/edit.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct NewsItemResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
    /// The stored post after the mutation.
    pub item: NewsItemDto,
}

/// Acknowledgement for delete.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct NewsDeleteResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
}

impl NewsItemResponse {
    pub fn new(post: Post) -> Self {
        Self {
            success: true,
            item: NewsItemDto::from(post),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, PostDraft, PostId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn feed_entry_uses_the_legacy_shape() {
        let draft = PostDraft::try_new(
            "Quarterly results".to_owned(),
            "Strong quarter.".to_owned(),
            Some(Category::Finance),
            0,
        )
        .expect("valid draft");
        let created = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("timestamp");
        let mut post = crate::domain::Post::publish(
            draft,
            vec!["https://images.invalid/inbrief/a".to_owned()],
            "Ada Lovelace".to_owned(),
            created,
        );
        post.id = "72a2e8f0-0f5e-4f1f-9c55-3f1b4f7a9d10"
            .parse::<PostId>()
            .expect("valid uuid");

        let value = serde_json::to_value(NewsItemDto::from(post)).expect("serialises");
        assert_eq!(value["id"], "72a2e8f0-0f5e-4f1f-9c55-3f1b4f7a9d10");
        assert_eq!(value["date"], "2026-03-01 09:30:00");
        assert_eq!(value["category"], "Finance");
        assert_eq!(
            value["image_urls"],
            serde_json::json!(["https://images.invalid/inbrief/a"])
        );
    }
}
