// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{cache::CacheInvalidator, time::Clock};
use crate::domain::category::CategoryRepository;
use crate::domain::post::{PostId, PostRepository};
use crate::domain::slug::UniqueSlugService;
use crate::domain::tag::{TagId, TagRepository};
use crate::domain::user::UserRepository;

pub struct PostCommandService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) cache: Arc<dyn CacheInvalidator>,
}

impl PostCommandService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            post_repo,
            category_repo,
            tag_repo,
            user_repo,
            slug_service,
            clock,
            cache,
        }
    }

    /// Re-validates that every referenced tag exists at execution time.
    pub(super) async fn resolve_tag_ids(&self, raw: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let ids = raw
            .iter()
            .map(|id| TagId::new(*id))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApplicationError::invalid_field("tagIds", e))?;
        let found = self.tag_repo.find_by_ids(&ids).await?;
        if found.len() != ids.len() {
            return Err(ApplicationError::not_found("one or more tags not found"));
        }
        Ok(ids)
    }

    /// Probes post slugs, skipping the post's own row on update.
    pub(super) async fn unique_post_slug(
        &self,
        title: &str,
        exclude: Option<PostId>,
    ) -> ApplicationResult<crate::domain::slug::Slug> {
        let repo = Arc::clone(&self.post_repo);
        let slug = self
            .slug_service
            .unique_slug(title, "post", |candidate| {
                let repo = Arc::clone(&repo);
                async move { repo.slug_exists(&candidate, exclude).await }
            })
            .await?;
        Ok(slug)
    }
}
