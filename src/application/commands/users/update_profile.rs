use super::{UserCommandService, sync::get_or_create_user};
use crate::application::dto::UserDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::user::{Bio, DisplayName, ProfileUpdate};

pub struct UpdateProfileCommand {
    pub name: String,
    pub bio: Option<String>,
}

impl UserCommandService {
    /// Updates name and bio on the caller's own row, never anyone else's.
    pub async fn update_profile(
        &self,
        identity: Option<&Identity>,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let actor = guard::check_author(identity)?;
        let user =
            get_or_create_user(self.user_repo.as_ref(), self.clock.as_ref(), &actor.identity)
                .await?;

        let name = DisplayName::new(command.name)
            .map_err(|e| ApplicationError::invalid_field("name", e))?;
        let bio = command
            .bio
            .map(Bio::new)
            .transpose()
            .map_err(|e| ApplicationError::invalid_field("bio", e))?;

        let updated = self
            .user_repo
            .update_profile(ProfileUpdate {
                id: user.id,
                display_name: name,
                bio,
                updated_at: self.clock.now(),
            })
            .await?;

        self.cache.invalidate(&[
            paths::dashboard_profile(),
            paths::author_profile(updated.id.into()),
        ]);
        Ok(updated.into())
    }
}
