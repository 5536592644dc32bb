// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentBody, CommentId, CommentStatus};
use crate::domain::post::{PostId, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::user::{AuthorRef, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentBody,
    pub status: CommentStatus,
    pub author_id: UserId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentBody,
    pub status: CommentStatus,
    pub author_id: UserId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
}

/// Minimal post projection carried by comment listings so moderation UIs
/// can link back to the post.
#[derive(Debug, Clone)]
pub struct CommentPostRef {
    pub id: PostId,
    pub slug: Slug,
    pub title: PostTitle,
}

#[derive(Debug, Clone)]
pub struct CommentListing {
    pub comment: Comment,
    pub author: AuthorRef,
    pub post: CommentPostRef,
}
