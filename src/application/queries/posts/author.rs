// src/application/queries/posts/author.rs
use super::service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use super::PostQueryService;
use crate::application::dto::{Page, PageRequest, PostDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::domain::post::{CommentScope, PostFilter, PostOrder, PostStatus};
use crate::domain::user::SubjectId;

impl PostQueryService {
    /// Dashboard feed scoped to the caller's own posts, drafts included,
    /// ordered by last edit. Comment counts cover every comment so the
    /// author sees pending moderation volume.
    pub async fn get_author_posts(
        &self,
        identity: Option<&Identity>,
        status: Option<PostStatus>,
        page: PageRequest,
    ) -> ApplicationResult<Page<PostDto>> {
        let actor = guard::check_author(identity)?;
        let subject = SubjectId::new(actor.identity.subject.clone())?;
        let user = self
            .user_repo
            .find_by_subject(&subject)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let page = page.normalize(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let (listings, total) = self
            .post_repo
            .list(
                PostFilter {
                    status,
                    category_slug: None,
                    tag_slug: None,
                    author_id: Some(user.id),
                },
                PostOrder::UpdatedAtDesc,
                CommentScope::All,
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
