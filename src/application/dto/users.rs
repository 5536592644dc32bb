use crate::domain::user::{AuthorRef, Role, User, UserListing};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub subject: String,
    pub email: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            subject: user.subject.into(),
            email: user.email.into(),
            name: user.display_name.map(Into::into),
            bio: user.bio.map(Into::into),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Admin listing row; the role is resolved from the identity collaborator
/// at query time, never read from local storage.
#[derive(Debug, Clone, Serialize)]
pub struct UserListingDto {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub post_count: u64,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl UserListingDto {
    pub fn from_parts(listing: UserListing, role: Role) -> Self {
        Self {
            id: listing.user.id.into(),
            email: listing.user.email.into(),
            name: listing.user.display_name.map(Into::into),
            role,
            post_count: listing.post_count,
            comment_count: listing.comment_count,
            created_at: listing.user.created_at,
        }
    }
}

/// Public author page: profile plus published output only.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorProfileDto {
    pub id: i64,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub published_post_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorRefDto {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl From<AuthorRef> for AuthorRefDto {
    fn from(author: AuthorRef) -> Self {
        Self {
            id: author.id.into(),
            name: author.name.map(Into::into),
            email: author.email.into(),
            bio: author.bio.map(Into::into),
        }
    }
}
