use crate::domain::comment::entity::{Comment, CommentListing, NewComment};
use crate::domain::comment::value_objects::{CommentId, CommentStatus};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct CommentFilter {
    pub post_id: Option<PostId>,
    pub status: Option<CommentStatus>,
}

/// Comment totals broken down by status, for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentCounts {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn set_status(&self, id: CommentId, status: CommentStatus) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    /// Offset page ordered by `created_at` descending, with total count.
    async fn list(
        &self,
        filter: CommentFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<CommentListing>, u64)>;
    /// Approved comments for a post, newest first, unpaginated (post detail).
    async fn approved_for_post(&self, post_id: PostId) -> DomainResult<Vec<CommentListing>>;
    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64>;
    async fn status_counts(&self) -> DomainResult<CommentCounts>;
}
