// src/application/commands/taxonomy/service.rs
use std::sync::Arc;

use crate::application::ports::{cache::CacheInvalidator, time::Clock};
use crate::domain::category::{CategoryId, CategoryRepository};
use crate::domain::post::PostRepository;
use crate::domain::slug::{Slug, UniqueSlugService};
use crate::domain::tag::TagRepository;
use crate::application::error::ApplicationResult;

pub struct TaxonomyCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) cache: Arc<dyn CacheInvalidator>,
}

impl TaxonomyCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        post_repo: Arc<dyn PostRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            category_repo,
            tag_repo,
            post_repo,
            slug_service,
            clock,
            cache,
        }
    }

    pub(super) async fn unique_category_slug(
        &self,
        name: &str,
        exclude: Option<CategoryId>,
    ) -> ApplicationResult<Slug> {
        let repo = Arc::clone(&self.category_repo);
        let slug = self
            .slug_service
            .unique_slug(name, "category", |candidate| {
                let repo = Arc::clone(&repo);
                async move { repo.slug_exists(&candidate, exclude).await }
            })
            .await?;
        Ok(slug)
    }

    pub(super) async fn unique_tag_slug(&self, name: &str) -> ApplicationResult<Slug> {
        let repo = Arc::clone(&self.tag_repo);
        let slug = self
            .slug_service
            .unique_slug(name, "tag", |candidate| {
                let repo = Arc::clone(&repo);
                async move { repo.slug_exists(&candidate).await }
            })
            .await?;
        Ok(slug)
    }
}
