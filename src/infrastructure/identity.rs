use crate::application::ports::identity::RoleDirectory;
use crate::domain::errors::DomainResult;
use crate::domain::user::Role;
use async_trait::async_trait;

/// Directory stub for deployments where the provider exposes no role
/// metadata; every subject resolves to the default role.
#[derive(Default, Clone)]
pub struct NullRoleDirectory;

#[async_trait]
impl RoleDirectory for NullRoleDirectory {
    async fn role_of(&self, _subject: &str) -> DomainResult<Option<Role>> {
        Ok(None)
    }
}
