// src/application/commands/taxonomy/tags.rs
use std::collections::HashSet;

use super::TaxonomyCommandService;
use crate::application::dto::TagDto;
use crate::application::error::{ApplicationError, ApplicationResult, FieldErrors};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::errors::DomainError;
use crate::domain::tag::{NewTag, TagName};

const MAX_BULK_TAGS: usize = 10;

impl TaxonomyCommandService {
    /// Create-or-get by normalized name. The service-level lookup is only a
    /// fast path; the unique constraint on the name is the arbiter, and a
    /// lost insert race resolves to the row the winner created.
    pub async fn create_or_get_tag(
        &self,
        identity: Option<&Identity>,
        name: impl AsRef<str>,
    ) -> ApplicationResult<TagDto> {
        guard::check_author(identity)?;

        let name =
            TagName::new(name).map_err(|e| ApplicationError::invalid_field("name", e))?;
        if let Some(tag) = self.tag_repo.find_by_name(&name).await? {
            return Ok(tag.into());
        }

        let slug = self.unique_tag_slug(name.as_str()).await?;
        let created = match self
            .tag_repo
            .insert(NewTag {
                name: name.clone(),
                slug,
                created_at: self.clock.now(),
            })
            .await
        {
            Ok(tag) => tag,
            Err(DomainError::Conflict(_)) => self
                .tag_repo
                .find_by_name(&name)
                .await?
                .ok_or_else(|| ApplicationError::not_found("tag not found after insert conflict"))?,
            Err(err) => return Err(err.into()),
        };

        self.cache.invalidate(&[paths::home()]);
        Ok(created.into())
    }

    /// Bulk variant: deduplicates case-insensitively, inserts the missing
    /// names ignoring duplicate-key races, and returns the full resolved
    /// set.
    pub async fn create_or_get_tags(
        &self,
        identity: Option<&Identity>,
        names: Vec<String>,
    ) -> ApplicationResult<Vec<TagDto>> {
        guard::check_author(identity)?;

        if names.len() > MAX_BULK_TAGS {
            return Err(ApplicationError::Validation(FieldErrors::field(
                "names",
                format!("maximum {MAX_BULK_TAGS} tags allowed"),
            )));
        }

        // TagName normalizes, so case/whitespace duplicates collapse here.
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        for raw in &names {
            let name =
                TagName::new(raw).map_err(|e| ApplicationError::invalid_field("names", e))?;
            if seen.insert(name.clone()) {
                normalized.push(name);
            }
        }
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.tag_repo.find_by_names(&normalized).await?;
        let existing_names: HashSet<&TagName> = existing.iter().map(|t| &t.name).collect();

        let mut new_tags = Vec::new();
        let mut batch_slugs: HashSet<String> = HashSet::new();
        for name in normalized
            .iter()
            .filter(|name| !existing_names.contains(name))
        {
            // Two distinct names in one batch can slugify identically, so
            // the probe also checks slugs already claimed by this batch.
            let repo = std::sync::Arc::clone(&self.tag_repo);
            let batch = &batch_slugs;
            let slug = self
                .slug_service
                .unique_slug(name.as_str(), "tag", |candidate| {
                    let repo = std::sync::Arc::clone(&repo);
                    let in_batch = batch.contains(&candidate);
                    async move {
                        if in_batch {
                            return Ok(true);
                        }
                        repo.slug_exists(&candidate).await
                    }
                })
                .await?;
            batch_slugs.insert(slug.as_str().to_string());
            new_tags.push(NewTag {
                name: name.clone(),
                slug,
                created_at: self.clock.now(),
            });
        }

        if !new_tags.is_empty() {
            self.tag_repo.insert_many_skip_duplicates(new_tags).await?;
        }

        let resolved = self.tag_repo.find_by_names(&normalized).await?;
        self.cache.invalidate(&[paths::home()]);
        Ok(resolved.into_iter().map(Into::into).collect())
    }
}
