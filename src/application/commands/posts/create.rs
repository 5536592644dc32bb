// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::application::commands::users::get_or_create_user;
use crate::application::dto::PostDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::category::CategoryId;
use crate::domain::post::{CoverImage, Excerpt, NewPost, PostContent, PostStatus, PostTitle};
use serde_json::Value;

pub struct CreatePostCommand {
    pub title: String,
    pub content: Value,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
    pub status: PostStatus,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        identity: Option<&Identity>,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = guard::check_author(identity)?;
        let author =
            get_or_create_user(self.user_repo.as_ref(), self.clock.as_ref(), &actor.identity)
                .await?;

        let title = PostTitle::new(command.title)
            .map_err(|e| ApplicationError::invalid_field("title", e))?;
        let excerpt = command
            .excerpt
            .map(Excerpt::new)
            .transpose()
            .map_err(|e| ApplicationError::invalid_field("excerpt", e))?;
        let cover_image = command
            .cover_image
            .map(CoverImage::new)
            .transpose()
            .map_err(|e| ApplicationError::invalid_field("coverImage", e))?;
        let category_id = CategoryId::new(command.category_id)
            .map_err(|e| ApplicationError::invalid_field("categoryId", e))?;

        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let tag_ids = self.resolve_tag_ids(&command.tag_ids).await?;

        let slug = self.unique_post_slug(title.as_str(), None).await?;
        let now = self.clock.now();

        let new_post = NewPost {
            title,
            slug,
            content: PostContent::new(command.content),
            excerpt,
            cover_image,
            status: command.status,
            published_at: (command.status == PostStatus::Published).then_some(now),
            author_id: author.id,
            category_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.post_repo.insert(new_post, &tag_ids).await?;
        let listing = self
            .post_repo
            .listing_by_id(created.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.cache
            .invalidate(&[paths::home(), paths::dashboard_posts()]);
        Ok(listing.into())
    }
}
