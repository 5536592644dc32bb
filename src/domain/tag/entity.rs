// src/domain/tag/entity.rs
use crate::domain::slug::Slug;
use crate::domain::tag::value_objects::{TagId, TagName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TagListing {
    pub tag: Tag,
    pub post_count: u64,
}
