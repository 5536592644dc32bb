// src/application/queries/users/authors.rs
use super::UserQueryService;
use crate::application::dto::{AuthorProfileDto, Page, PageRequest, PostDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::post::{CommentScope, PostFilter, PostOrder, PostStatus};
use crate::domain::user::UserId;

const AUTHOR_POSTS_DEFAULT: u32 = 10;
const AUTHOR_POSTS_MAX: u32 = 50;

impl UserQueryService {
    /// Public author page header. Exposes profile fields and published
    /// output only; email and subject stay private.
    pub async fn get_author_by_id(&self, id: i64) -> ApplicationResult<AuthorProfileDto> {
        let id = UserId::new(id).map_err(|_| ApplicationError::not_found("author not found"))?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let published_post_count = self.post_repo.count_published_by_author(user.id).await?;
        Ok(AuthorProfileDto {
            id: user.id.into(),
            name: user.display_name.map(Into::into),
            bio: user.bio.map(Into::into),
            created_at: user.created_at,
            published_post_count,
        })
    }

    /// The author's published posts, newest publication first.
    pub async fn get_author_published_posts(
        &self,
        id: i64,
        page: PageRequest,
    ) -> ApplicationResult<Page<PostDto>> {
        let id = UserId::new(id).map_err(|_| ApplicationError::not_found("author not found"))?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let page = page.normalize(AUTHOR_POSTS_DEFAULT, AUTHOR_POSTS_MAX);
        let (listings, total) = self
            .post_repo
            .list(
                PostFilter {
                    status: Some(PostStatus::Published),
                    category_slug: None,
                    tag_slug: None,
                    author_id: Some(id),
                },
                PostOrder::PublishedAtDesc,
                CommentScope::Approved,
                page.limit,
                page.offset(),
            )
            .await?;
        Ok(Page::new(
            listings.into_iter().map(Into::into).collect(),
            page,
            total,
        ))
    }
}
