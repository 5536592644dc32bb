use super::PostCommandService;
use crate::application::commands::users::get_or_create_user;
use crate::application::dto::PostDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::category::CategoryId;
use crate::domain::post::{
    CoverImage, Excerpt, Post, PostContent, PostId, PostStatus, PostTitle, PostUpdate,
    specifications::CanModifyPostSpec,
};
use serde_json::Value;

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<Value>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<i64>,
    /// `Some` replaces the tag set wholesale; `Some(vec![])` clears it.
    pub tag_ids: Option<Vec<i64>>,
    pub status: Option<PostStatus>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        identity: Option<&Identity>,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = guard::check_author(identity)?;
        let caller =
            get_or_create_user(self.user_repo.as_ref(), self.clock.as_ref(), &actor.identity)
                .await?;

        let id = PostId::new(command.id)
            .map_err(|e| ApplicationError::invalid_field("id", e))?;
        let mut post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(actor.role, caller.id, &post).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you do not have permission to edit this post",
            ));
        }

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        if let Some(title) = command.title {
            let title = PostTitle::new(title)
                .map_err(|e| ApplicationError::invalid_field("title", e))?;
            // Slug follows the title, but only when the title actually
            // changed; the probe skips our own row.
            if title != post.title {
                let slug = self.unique_post_slug(title.as_str(), Some(id)).await?;
                update = update.with_title(title, slug);
            }
        }

        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content));
        }
        if let Some(excerpt) = command.excerpt {
            let excerpt = Excerpt::new(excerpt)
                .map_err(|e| ApplicationError::invalid_field("excerpt", e))?;
            update = update.with_excerpt(excerpt);
        }
        if let Some(cover_image) = command.cover_image {
            let cover_image = CoverImage::new(cover_image)
                .map_err(|e| ApplicationError::invalid_field("coverImage", e))?;
            update = update.with_cover_image(cover_image);
        }

        if let Some(category_id) = command.category_id {
            let category_id = CategoryId::new(category_id)
                .map_err(|e| ApplicationError::invalid_field("categoryId", e))?;
            self.category_repo
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("category not found"))?;
            update = update.with_category(category_id);
        }

        if let Some(tag_ids) = command.tag_ids {
            let tag_ids = self.resolve_tag_ids(&tag_ids).await?;
            update = update.with_replace_tags(tag_ids);
        }

        if let Some(status) = command.status {
            update = Self::apply_status_change(&mut post, status, update, now);
        }

        let updated = self.post_repo.update(update).await?;
        let listing = self
            .post_repo
            .listing_by_id(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.cache.invalidate(&[
            paths::home(),
            paths::dashboard_posts(),
            paths::post_detail(updated.slug.as_str()),
        ]);
        Ok(listing.into())
    }

    fn apply_status_change(
        post: &mut Post,
        status: PostStatus,
        update: PostUpdate,
        now: chrono::DateTime<chrono::Utc>,
    ) -> PostUpdate {
        if status == post.status {
            return update;
        }
        // The entity owns the publish-once rule: the stamp is set on the
        // first Draft→Published edge and survives unpublishing.
        post.set_status(status, now);
        update.with_publish_state(post.status, post.published_at)
    }
}
