// src/application/commands/users/sync.rs
use super::UserCommandService;
use crate::application::dto::UserDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::time::Clock;
use crate::domain::errors::DomainError;
use crate::domain::user::{DisplayName, Email, NewUser, SubjectId, User, UserRepository};

/// Looks up the local row for an external identity, creating it on first
/// authenticated access. Idempotent: a lost first-login race is recovered
/// by re-fetching the row the winner created.
pub(crate) async fn get_or_create_user(
    user_repo: &dyn UserRepository,
    clock: &dyn Clock,
    identity: &Identity,
) -> ApplicationResult<User> {
    let subject = SubjectId::new(identity.subject.clone())?;
    if let Some(user) = user_repo.find_by_subject(&subject).await? {
        return Ok(user);
    }

    let new_user = NewUser {
        subject: subject.clone(),
        email: Email::new(identity.email.clone())?,
        // Provider-supplied names are best-effort; an out-of-bounds one is
        // dropped rather than blocking the sync.
        display_name: identity
            .display_name
            .as_deref()
            .and_then(|name| DisplayName::new(name).ok()),
        created_at: clock.now(),
    };

    match user_repo.insert(new_user).await {
        Ok(user) => Ok(user),
        Err(DomainError::Conflict(_)) => user_repo
            .find_by_subject(&subject)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found after insert conflict")),
        Err(err) => Err(err.into()),
    }
}

impl UserCommandService {
    pub async fn get_or_create(
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
