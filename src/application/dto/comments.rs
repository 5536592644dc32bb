use crate::application::dto::users::AuthorRefDto;
use crate::domain::comment::{Comment, CommentListing, CommentPostRef, CommentStatus};
use crate::domain::user::AuthorRef;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CommentPostRefDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
}

impl From<CommentPostRef> for CommentPostRefDto {
    fn from(post: CommentPostRef) -> Self {
        Self {
            id: post.id.into(),
            slug: post.slug.into(),
            title: post.title.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: i64,
    pub content: String,
    pub status: CommentStatus,
    pub author: AuthorRefDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<CommentPostRefDto>,
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// For a freshly created comment, before any listing join exists.
    pub fn from_comment(comment: Comment, author: AuthorRef) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content.into(),
            status: comment.status,
            author: author.into(),
            post: None,
            created_at: comment.created_at,
        }
    }
}

impl From<CommentListing> for CommentDto {
    fn from(listing: CommentListing) -> Self {
        Self {
            id: listing.comment.id.into(),
            content: listing.comment.content.into(),
            status: listing.comment.status,
            author: listing.author.into(),
            post: Some(listing.post.into()),
            created_at: listing.comment.created_at,
        }
    }
}
