// src/application/queries/posts/admin.rs
use super::service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use super::PostQueryService;
use crate::application::dto::{Page, PageRequest, PostDto};
use crate::application::error::ApplicationResult;
use crate::application::guard::{self, Identity};
use crate::domain::post::{CommentScope, PostFilter, PostOrder, PostStatus};

impl PostQueryService {
    /// Moderation view over every author's posts, drafts included.
    pub async fn get_all_posts(
        &self,
        identity: Option<&Identity>,
        status: Option<PostStatus>,
        page: PageRequest,
    ) -> ApplicationResult<Page<PostDto>> {
        guard::check_admin(identity)?;

        let page = page.normalize(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let (listings, total) = self
            .post_repo
            .list(
                PostFilter {
                    status,
                    ..PostFilter::default()
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
