use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostListing, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostStatus};
use crate::domain::slug::Slug;
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub category_slug: Option<String>,
    pub tag_slug: Option<String>,
    pub author_id: Option<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    PublishedAtDesc,
    UpdatedAtDesc,
}

/// Post totals broken down by status, for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostCounts {
    pub total: u64,
    pub published: u64,
    pub draft: u64,
}

/// Which comments a listing's `comment_count` covers. Public surfaces count
/// approved comments only; author/admin dashboards count everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScope {
    Approved,
    All,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts the post and its tag join rows in one transaction.
    async fn insert(&self, post: NewPost, tag_ids: &[TagId]) -> DomainResult<Post>;
    /// Applies the partial update; when `replace_tags` is set the existing
    /// join rows are deleted and recreated in the same transaction.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Removes the post together with its comments and tag joins.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn slug_exists(&self, slug: &str, exclude: Option<PostId>) -> DomainResult<bool>;
    /// Offset page of posts matching `filter`, with total match count.
    async fn list(
        &self,
        filter: PostFilter,
        order: PostOrder,
        comment_scope: CommentScope,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<PostListing>, u64)>;
    /// Published posts whose title or excerpt contains `needle`
    /// (case-insensitive), ordered by `published_at` descending.
    async fn search_published(
        &self,
        needle: &str,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<PostListing>, u64)>;
    /// Single post with relations resolved, regardless of status.
    async fn listing_by_id(&self, id: PostId) -> DomainResult<Option<PostListing>>;
    async fn count_by_category(&self, id: CategoryId) -> DomainResult<u64>;
    async fn count_published_by_author(&self, author_id: UserId) -> DomainResult<u64>;
    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64>;
    /// The author's most recently created posts, any status.
    async fn recent_by_author(&self, author_id: UserId, limit: u32) -> DomainResult<Vec<Post>>;
    async fn status_counts(&self) -> DomainResult<PostCounts>;
}
