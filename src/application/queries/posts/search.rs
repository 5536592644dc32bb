// src/application/queries/posts/search.rs
use super::service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use super::PostQueryService;
use crate::application::dto::{Page, PageRequest, PostDto};
use crate::application::error::ApplicationResult;

/// Strips everything except word characters and whitespace so raw user
/// input can never smuggle pattern metacharacters into the match.
pub(crate) fn sanitize_query(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

impl PostQueryService {
    /// Public search over published posts. Repository order is newest
    /// publication first; within the returned page, posts matching on the
    /// title are ranked ahead of excerpt-only matches, preserving relative
    /// order inside each group.
    pub async fn search_posts(
        &self,
        query: &str,
        page: PageRequest,
    ) -> ApplicationResult<Page<PostDto>> {
        let page = page.normalize(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let needle = sanitize_query(query);
        if needle.is_empty() {
            return Ok(Page::empty(page));
        }

        let (mut listings, total) = self
            .post_repo
            .search_published(&needle, page.limit, page.offset())
            .await?;

        let needle_lower = needle.to_lowercase();
        listings.sort_by_key(|listing| {
            !listing
                .post
                .title
                .as_str()
                .to_lowercase()
                .contains(&needle_lower)
        });

        Ok(Page::new(
            listings.into_iter().map(Into::into).collect(),
            page,
            total,
        ))
    }
}
