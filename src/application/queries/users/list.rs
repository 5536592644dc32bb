// src/application/queries/users/list.rs
use super::service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use super::UserQueryService;
use crate::application::dto::{Page, PageRequest, UserListingDto};
use crate::application::error::ApplicationResult;
use crate::application::guard::{self, Identity};
use crate::domain::user::Role;

impl UserQueryService {
    /// Admin user directory with activity counts. Roles live at the
    /// identity provider, so each row is annotated via a directory lookup;
    /// a failed lookup degrades that row to `Author` rather than failing
    /// the whole page.
    pub async fn get_users(
        &self,
        identity: Option<&Identity>,
        search: Option<&str>,
        page: PageRequest,
    ) -> ApplicationResult<Page<UserListingDto>> {
        guard::check_admin(identity)?;

        let page = page.normalize(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let (listings, total) = self
            .user_repo
            .list_page(page.limit, page.offset(), search)
            .await?;

        let mut items = Vec::with_capacity(listings.len());
        for listing in listings {
            let role = match self
                .role_directory
                .role_of(listing.user.subject.as_str())
                .await
            {
                Ok(claim) => claim.unwrap_or_default(),
                Err(err) => {
                    tracing::warn!(
                        user_id = i64::from(listing.user.id),
                        error = %err,
                        "role lookup failed, defaulting to author"
                    );
                    Role::Author
                }
            };
            items.push(UserListingDto::from_parts(listing, role));
        }
        Ok(Page::new(items, page, total))
    }
}
