use crate::domain::tag::{Tag, TagListing};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
            slug: tag.slug.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagListingDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub post_count: u64,
}

impl From<TagListing> for TagListingDto {
    fn from(listing: TagListing) -> Self {
        Self {
            id: listing.tag.id.into(),
            name: listing.tag.name.into(),
            slug: listing.tag.slug.into(),
            post_count: listing.post_count,
        }
    }
}
