use crate::domain::category::entity::{Category, CategoryListing, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn slug_exists(&self, slug: &str, exclude: Option<CategoryId>) -> DomainResult<bool>;
    /// All categories ordered by name, each with its published-post count.
    async fn list_with_published_counts(&self) -> DomainResult<Vec<CategoryListing>>;
    async fn published_post_count(&self, id: CategoryId) -> DomainResult<u64>;
}
