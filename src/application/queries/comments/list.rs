// src/application/queries/comments/list.rs
use super::CommentQueryService;
use crate::application::dto::{CommentDto, Page, PageRequest};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::domain::comment::{CommentFilter, CommentStatus};
use crate::domain::post::PostId;

impl CommentQueryService {
    /// Public comment page for a post. The approved-only constraint is
    /// fixed here, not caller-supplied.
    pub async fn get_public_comments(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> ApplicationResult<Page<CommentDto>> {
        let post_id = PostId::new(post_id)
            .map_err(|e| ApplicationError::invalid_field("postId", e))?;
        self.list_page(
            CommentFilter {
                post_id: Some(post_id),
                status: Some(CommentStatus::Approved),
            },
            page,
        )
        .await
    }

    /// Moderation queue: any status, optionally narrowed to one status or
    /// one post.
    pub async fn get_admin_comments(
        &self,
        identity: Option<&Identity>,
        status: Option<CommentStatus>,
        post_id: Option<i64>,
        page: PageRequest,
    ) -> ApplicationResult<Page<CommentDto>> {
        guard::check_admin(identity)?;
        let post_id = post_id
            .map(PostId::new)
            .transpose()
            .map_err(|e| ApplicationError::invalid_field("postId", e))?;
        self.list_page(CommentFilter { post_id, status }, page).await
    }
}
