use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::tag::entity::{NewTag, Tag, TagListing};
use crate::domain::tag::value_objects::{TagId, TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Unique constraint on the normalized name is the source of truth;
    /// a `Conflict` here means another caller created the tag first.
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    /// Bulk insert skipping rows that lose a duplicate-key race.
    async fn insert_many_skip_duplicates(&self, tags: Vec<NewTag>) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;
    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool>;
    /// Up to `limit` tags whose name contains `needle`, ordered by name.
    async fn search_by_name(&self, needle: &str, limit: u32) -> DomainResult<Vec<Tag>>;
    /// All tags ordered by name, each with its published-post count.
    async fn list_with_published_counts(&self) -> DomainResult<Vec<TagListing>>;
    async fn published_post_count(&self, id: TagId) -> DomainResult<u64>;
}
