// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryDescription, CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<CategoryDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<CategoryDescription>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<Slug>,
    pub description: Option<CategoryDescription>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: CategoryName, slug: Slug) -> Self {
        self.name = Some(name);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: CategoryDescription) -> Self {
        self.description = Some(description);
        self
    }
}

/// Public listing read model; `post_count` counts published posts only.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub category: Category,
    pub post_count: u64,
}
