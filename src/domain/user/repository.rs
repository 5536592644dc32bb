use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, ProfileUpdate, User, UserListing};
use crate::domain::user::value_objects::{SubjectId, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Unique constraint on `subject` is the arbiter for concurrent
    /// first-login races; callers recover from `Conflict` by re-fetching.
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_subject(&self, subject: &SubjectId) -> DomainResult<Option<User>>;
    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User>;
    /// Offset page ordered by `created_at` descending, with an optional
    /// case-insensitive substring match over name and email.
    async fn list_page(
        &self,
        limit: u32,
        offset: u64,
        search: Option<&str>,
    ) -> DomainResult<(Vec<UserListing>, u64)>;
}
