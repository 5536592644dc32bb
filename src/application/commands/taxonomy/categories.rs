// src/application/commands/taxonomy/categories.rs
use super::TaxonomyCommandService;
use crate::application::dto::CategoryDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::category::{
    CategoryDescription, CategoryId, CategoryName, CategoryUpdate, NewCategory,
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TaxonomyCommandService {
    pub async fn create_category(
        &self,
        identity: Option<&Identity>,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        guard::check_admin(identity)?;

        let name = CategoryName::new(command.name)
            .map_err(|e| ApplicationError::invalid_field("name", e))?;
        let description = command
            .description
            .map(CategoryDescription::new)
            .transpose()
            .map_err(|e| ApplicationError::invalid_field("description", e))?;

        if self.category_repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a category with this name already exists",
            ));
        }

        let slug = self.unique_category_slug(name.as_str(), None).await?;
        let created = self
            .category_repo
            .insert(NewCategory {
                name,
                slug,
                description,
                created_at: self.clock.now(),
            })
            .await?;

        self.cache
            .invalidate(&[paths::admin_categories(), paths::home()]);
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        identity: Option<&Identity>,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        guard::check_admin(identity)?;

        let id = CategoryId::new(command.id)
            .map_err(|e| ApplicationError::invalid_field("id", e))?;
        let existing = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut update = CategoryUpdate::new(id, self.clock.now());

        if let Some(name) = command.name {
            let name = CategoryName::new(name)
                .map_err(|e| ApplicationError::invalid_field("name", e))?;
            if name != existing.name {
                if self.category_repo.find_by_name(&name).await?.is_some() {
                    return Err(ApplicationError::conflict(
                        "a category with this name already exists",
                    ));
                }
                // Slug only moves with the name, excluding our own row
                // from the collision probe.
                let slug = self.unique_category_slug(name.as_str(), Some(id)).await?;
                update = update.with_name(name, slug);
            }
        }

        if let Some(description) = command.description {
            let description = CategoryDescription::new(description)
                .map_err(|e| ApplicationError::invalid_field("description", e))?;
            update = update.with_description(description);
        }

        let updated = self.category_repo.update(update).await?;
        self.cache.invalidate(&[
            paths::admin_categories(),
            paths::home(),
            paths::category_detail(updated.slug.as_str()),
        ]);
        Ok(updated.into())
    }

    /// Referential restrict: a category with posts cannot be removed. The
    /// error message carries the exact count so UIs can render it.
    pub async fn delete_category(
        &self,
        identity: Option<&Identity>,
        id: i64,
    ) -> ApplicationResult<()> {
        guard::check_admin(identity)?;

        let id = CategoryId::new(id).map_err(|e| ApplicationError::invalid_field("id", e))?;
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let referencing = self.post_repo.count_by_category(id).await?;
        if referencing > 0 {
            return Err(ApplicationError::precondition_failed(format!(
                "cannot delete category with {referencing} post(s); reassign posts to another category first"
            )));
        }

        self.category_repo.delete(id).await?;
        self.cache
            .invalidate(&[paths::admin_categories(), paths::home()]);
        Ok(())
    }
}
