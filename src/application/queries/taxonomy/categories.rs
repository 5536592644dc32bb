// src/application/queries/taxonomy/categories.rs
use super::TaxonomyQueryService;
use crate::application::dto::CategoryListingDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::slug::Slug;

impl TaxonomyQueryService {
    /// All categories ordered by name, each carrying its published-post
    /// count. Public surface, so drafts never count.
    pub async fn get_categories(&self) -> ApplicationResult<Vec<CategoryListingDto>> {
        let listings = self.category_repo.list_with_published_counts().await?;
        Ok(listings.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(
        &self,
        slug: &str,
    ) -> ApplicationResult<CategoryListingDto> {
        let slug =
            Slug::new(slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let post_count = self.category_repo.published_post_count(category.id).await?;
        Ok(CategoryListingDto {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.into(),
            description: category.description.map(Into::into),
            post_count,
        })
    }
}
