// src/application/queries/taxonomy/tags.rs
use super::TaxonomyQueryService;
use crate::application::dto::{TagDto, TagListingDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::slug::Slug;

const TAG_SUGGESTION_LIMIT: u32 = 10;

impl TaxonomyQueryService {
    pub async fn get_tags(&self) -> ApplicationResult<Vec<TagListingDto>> {
        let listings = self.tag_repo.list_with_published_counts().await?;
        Ok(listings.into_iter().map(Into::into).collect())
    }

    pub async fn get_tag_by_slug(&self, slug: &str) -> ApplicationResult<TagListingDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("tag not found"))?;
        let tag = self
            .tag_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
        let post_count = self.tag_repo.published_post_count(tag.id).await?;
        Ok(TagListingDto {
            id: tag.id.into(),
            name: tag.name.into(),
            slug: tag.slug.into(),
            post_count,
        })
    }

    /// Autocomplete lookup for the editor's tag picker. Matching is
    /// case-insensitive because stored names are already lowercased.
    pub async fn search_tags(&self, query: &str) -> ApplicationResult<Vec<TagDto>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let tags = self
            .tag_repo
            .search_by_name(&needle, TAG_SUGGESTION_LIMIT)
            .await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
