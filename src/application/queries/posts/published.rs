// src/application/queries/posts/published.rs
use super::service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use super::PostQueryService;
use crate::application::dto::{Page, PageRequest, PostDto};
use crate::application::error::ApplicationResult;
use crate::domain::post::{CommentScope, PostFilter, PostOrder, PostStatus};

/// Optional narrowing for the public post feed.
#[derive(Debug, Clone, Default)]
pub struct PublishedPostFilter {
    pub category_slug: Option<String>,
    pub tag_slug: Option<String>,
}

impl PostQueryService {
    /// Public feed: published posts only, newest publication first. Comment
    /// counts cover approved comments, matching what a reader would see.
    pub async fn get_published_posts(
        &self,
        filter: PublishedPostFilter,
        page: PageRequest,
    ) -> ApplicationResult<Page<PostDto>> {
        let page = page.normalize(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let (listings, total) = self
            .post_repo
            .list(
                PostFilter {
                    status: Some(PostStatus::Published),
                    category_slug: filter.category_slug,
                    tag_slug: filter.tag_slug,
                    author_id: None,
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
