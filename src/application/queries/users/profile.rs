// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::application::commands::users::get_or_create_user;
use crate::application::dto::UserDto;
use crate::application::error::ApplicationResult;
use crate::application::guard::{self, Identity};

impl UserQueryService {
    /// The caller's own profile row, created on first access so a fresh
    /// login always has something to render.
    pub async fn get_current_profile(
        &self,
        identity: Option<&Identity>,
    ) -> ApplicationResult<UserDto> {
        let actor = guard::check_author(identity)?;
        let user =
            get_or_create_user(self.user_repo.as_ref(), self.clock.as_ref(), &actor.identity)
                .await?;
        Ok(user.into())
    }
}
