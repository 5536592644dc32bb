// src/application/ports/identity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::Role;
use async_trait::async_trait;

/// Role lookup against the external identity provider, used when listings
/// need role annotations for users other than the caller.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// `Ok(None)` means the provider knows the subject but carries no role
    /// claim. Lookup failures surface as errors; callers decide whether an
    /// individual failure is fatal.
    async fn role_of(&self, subject: &str) -> DomainResult<Option<Role>>;
}
