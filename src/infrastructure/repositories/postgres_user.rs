// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Bio, DisplayName, Email, NewUser, ProfileUpdate, SubjectId, User, UserId, UserListing,
    UserRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    subject: String,
    email: String,
    display_name: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            subject: SubjectId::new(row.subject)?,
            email: Email::new(row.email)?,
            display_name: row.display_name.map(DisplayName::new).transpose()?,
            bio: row.bio.map(Bio::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct UserListingRow {
    id: i64,
    subject: String,
    email: String,
    display_name: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    post_count: i64,
    comment_count: i64,
}

impl TryFrom<UserListingRow> for UserListing {
    type Error = DomainError;

    fn try_from(row: UserListingRow) -> Result<Self, Self::Error> {
        Ok(UserListing {
            user: User {
                id: UserId::new(row.id)?,
                subject: SubjectId::new(row.subject)?,
                email: Email::new(row.email)?,
                display_name: row.display_name.map(DisplayName::new).transpose()?,
                bio: row.bio.map(Bio::new).transpose()?,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            post_count: row.post_count as u64,
            comment_count: row.comment_count as u64,
        })
    }
}

const USER_COLUMNS: &str = "id, subject, email, display_name, bio, created_at, updated_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let NewUser {
            subject,
            email,
            display_name,
            created_at,
        } = user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (subject, email, display_name, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, subject, email, display_name, bio, created_at, updated_at",
        )
        .bind(subject.as_str())
        .bind(email.as_str())
        .bind(display_name.as_ref().map(DisplayName::as_str))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_subject(&self, subject: &SubjectId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE subject = $1"
        ))
        .bind(subject.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User> {
        let ProfileUpdate {
            id,
            display_name,
            bio,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET display_name = $2, bio = $3, updated_at = $4
             WHERE id = $1
             RETURNING id, subject, email, display_name, bio, created_at, updated_at",
        )
        .bind(i64::from(id))
        .bind(display_name.as_str())
        .bind(bio.as_ref().map(Bio::as_str))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn list_page(
        &self,
        limit: u32,
        offset: u64,
        search: Option<&str>,
    ) -> DomainResult<(Vec<UserListing>, u64)> {
        let pattern = search.map(|s| format!("%{s}%"));

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM users u");
        if let Some(pattern) = &pattern {
            count_builder.push(" WHERE u.display_name ILIKE ");
            count_builder.push_bind(pattern);
            count_builder.push(" OR u.email ILIKE ");
            count_builder.push_bind(pattern);
        }
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT u.id, u.subject, u.email, u.display_name, u.bio, u.created_at, u.updated_at,
                    (SELECT COUNT(1) FROM posts p WHERE p.author_id = u.id) AS post_count,
                    (SELECT COUNT(1) FROM comments c WHERE c.author_id = u.id) AS comment_count
             FROM users u",
        );
        if let Some(pattern) = &pattern {
            builder.push(" WHERE u.display_name ILIKE ");
            builder.push_bind(pattern);
            builder.push(" OR u.email ILIKE ");
            builder.push_bind(pattern);
        }
        builder.push(" ORDER BY u.created_at DESC, u.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<UserListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let listings = rows
            .into_iter()
            .map(UserListing::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((listings, total as u64))
    }
}
