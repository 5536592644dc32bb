use crate::application::dto::categories::CategoryDto;
use crate::application::dto::comments::CommentDto;
use crate::application::dto::tags::TagDto;
use crate::application::dto::users::AuthorRefDto;
use crate::domain::post::{PostListing, PostStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Opaque editor document, passed through verbatim.
    pub content: Value,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author: AuthorRefDto,
    pub category: CategoryDto,
    pub tags: Vec<TagDto>,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostListing> for PostDto {
    fn from(listing: PostListing) -> Self {
        let PostListing {
            post,
            author,
            category,
            tags,
            comment_count,
        } = listing;
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            content: post.content.into_value(),
            excerpt: post.excerpt.map(Into::into),
            cover_image: post.cover_image.map(Into::into),
            status: post.status,
            published_at: post.published_at,
            author: author.into(),
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            comment_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Public post page payload: the post plus its approved comments, newest
/// first.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailDto {
    pub post: PostDto,
    pub comments: Vec<CommentDto>,
}
