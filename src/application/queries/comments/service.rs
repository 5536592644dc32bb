// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::application::dto::{CommentDto, Page, PageRequest};
use crate::application::error::ApplicationResult;
use crate::domain::comment::{CommentFilter, CommentRepository};

pub(super) const DEFAULT_PAGE_SIZE: u32 = 20;
pub(super) const MAX_PAGE_SIZE: u32 = 100;

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    pub(super) async fn list_page(
        &self,
        filter: CommentFilter,
        page: PageRequest,
    ) -> ApplicationResult<Page<CommentDto>> {
        let page = page.normalize(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let (listings, total) = self
            .comment_repo
            .list(filter, page.limit, page.offset())
            .await?;
        Ok(Page::new(
            listings.into_iter().map(Into::into).collect(),
            page,
            total,
        ))
    }
}
