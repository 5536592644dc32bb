// src/application/queries/posts/by_slug.rs
use super::PostQueryService;
use crate::application::dto::{PostDetailDto, PostDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::slug::Slug;

impl PostQueryService {
    /// Public post page: the post plus its approved comments, newest first.
    /// Drafts are indistinguishable from missing posts to the outside.
    pub async fn get_post_by_slug(&self, slug: &str) -> ApplicationResult<PostDetailDto> {
        let slug =
            Slug::new(slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .post_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_published())
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let listing = self
            .post_repo
            .listing_by_id(post.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        let comments = self.comment_repo.approved_for_post(post.id).await?;

        Ok(PostDetailDto {
            post: PostDto::from(listing),
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }
}
