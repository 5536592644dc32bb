// src/application/dto/admin.rs
use crate::domain::comment::CommentCounts;
use crate::domain::post::{Post, PostCounts, PostStatus};
use crate::domain::user::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Admin overview counters: posts and comments broken down by status.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatsDto {
    pub total_posts: u64,
    pub published_posts: u64,
    pub draft_posts: u64,
    pub total_comments: u64,
    pub pending_comments: u64,
    pub approved_comments: u64,
}

impl DashboardStatsDto {
    pub fn from_counts(posts: PostCounts, comments: CommentCounts) -> Self {
        Self {
            total_posts: posts.total,
            published_posts: posts.published,
            draft_posts: posts.draft,
            total_comments: comments.total,
            pending_comments: comments.pending,
            approved_comments: comments.approved,
        }
    }
}

/// Slim row for the recent-activity strip on the admin user page.
#[derive(Debug, Clone, Serialize)]
pub struct RecentPostDto {
    pub id: i64,
    pub title: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for RecentPostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            status: post.status,
            created_at: post.created_at,
        }
    }
}

/// Admin single-user page: full profile, activity counts, the most recent
/// posts, and the directory-resolved role.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailDto {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub role: Role,
    pub post_count: u64,
    pub comment_count: u64,
    pub recent_posts: Vec<RecentPostDto>,
    pub created_at: DateTime<Utc>,
}
