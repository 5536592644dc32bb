use crate::domain::category::{Category, CategoryListing};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.into(),
            description: category.description.map(Into::into),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListingDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Published posts only; drafts stay invisible on public surfaces.
    pub post_count: u64,
}

impl From<CategoryListing> for CategoryListingDto {
    fn from(listing: CategoryListing) -> Self {
        Self {
            id: listing.category.id.into(),
            name: listing.category.name.into(),
            slug: listing.category.slug.into(),
            description: listing.category.description.map(Into::into),
            post_count: listing.post_count,
        }
    }
}
