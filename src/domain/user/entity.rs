// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Bio, DisplayName, Email, SubjectId, UserId};
use chrono::{DateTime, Utc};

/// Local user row synced from the external identity provider on first
/// authenticated access. Never hard-deleted by this layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub subject: SubjectId,
    pub email: Email,
    pub display_name: Option<DisplayName>,
    pub bio: Option<Bio>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub subject: SubjectId,
    pub email: Email,
    pub display_name: Option<DisplayName>,
    pub created_at: DateTime<Utc>,
}

/// Profile mutation scoped to the caller's own row.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: UserId,
    pub display_name: DisplayName,
    pub bio: Option<Bio>,
    pub updated_at: DateTime<Utc>,
}

/// Admin listing read model; post/comment counts come from the persistence
/// layer, the role is joined in by the query service.
#[derive(Debug, Clone)]
pub struct UserListing {
    pub user: User,
    pub post_count: u64,
    pub comment_count: u64,
}

/// Author projection embedded in post and comment read models.
#[derive(Debug, Clone)]
pub struct AuthorRef {
    pub id: UserId,
    pub name: Option<DisplayName>,
    pub email: Email,
    pub bio: Option<Bio>,
}

impl From<&User> for AuthorRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.display_name.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
        }
    }
}
