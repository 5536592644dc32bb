// src/application/guard.rs
//
// Authorization guard: every privileged operation receives the caller's
// verified identity as an explicit parameter and resolves the effective
// role exactly once. Nothing here reads ambient/global auth state.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::Role;

/// Verified caller identity as handed over by the identity collaborator.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub email: String,
    pub display_name: Option<String>,
    /// Role claim from identity metadata; absent means plain `Author`.
    pub role_claim: Option<Role>,
}

impl Identity {
    pub fn effective_role(&self) -> Role {
        self.role_claim.unwrap_or_default()
    }
}

/// Identity plus the role resolved for this request.
#[derive(Debug, Clone)]
pub struct Actor {
    pub identity: Identity,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

pub fn require_role(
    identity: Option<&Identity>,
    allowed: &[Role],
) -> ApplicationResult<Actor> {
    let identity = identity
        .ok_or_else(|| ApplicationError::unauthenticated("authentication required"))?;
    let role = identity.effective_role();
    if !allowed.contains(&role) {
        return Err(ApplicationError::forbidden(format!(
            "role '{role}' is not permitted for this operation"
        )));
    }
    Ok(Actor {
        identity: identity.clone(),
        role,
    })
}

/// Any authenticated identity: every caller is at least an Author.
pub fn check_author(identity: Option<&Identity>) -> ApplicationResult<Actor> {
    require_role(identity, &[Role::Author, Role::Admin])
}

pub fn check_admin(identity: Option<&Identity>) -> ApplicationResult<Actor> {
    require_role(identity, &[Role::Admin])
}
