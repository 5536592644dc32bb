// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentBody, CommentCounts, CommentFilter, CommentId, CommentListing,
    CommentPostRef, CommentRepository, CommentStatus, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{PostId, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::user::{AuthorRef, Bio, DisplayName, Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    status: String,
    author_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content: CommentBody::new(row.content)?,
            status: row.status.parse()?,
            author_id: UserId::new(row.author_id)?,
            post_id: PostId::new(row.post_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentListingRow {
    id: i64,
    content: String,
    status: String,
    author_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: Option<String>,
    author_email: String,
    author_bio: Option<String>,
    post_slug: String,
    post_title: String,
}

impl TryFrom<CommentListingRow> for CommentListing {
    type Error = DomainError;

    fn try_from(row: CommentListingRow) -> Result<Self, Self::Error> {
        Ok(CommentListing {
            comment: Comment {
                id: CommentId::new(row.id)?,
                content: CommentBody::new(row.content)?,
                status: row.status.parse()?,
                author_id: UserId::new(row.author_id)?,
                post_id: PostId::new(row.post_id)?,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author: AuthorRef {
                id: UserId::new(row.author_id)?,
                name: row.author_name.map(DisplayName::new).transpose()?,
                email: Email::new(row.author_email)?,
                bio: row.author_bio.map(Bio::new).transpose()?,
            },
            post: CommentPostRef {
                id: PostId::new(row.post_id)?,
                slug: Slug::new(row.post_slug)?,
                title: PostTitle::new(row.post_title)?,
            },
        })
    }
}

const LISTING_SELECT: &str =
    "SELECT cm.id, cm.content, cm.status, cm.author_id, cm.post_id, cm.created_at, cm.updated_at,
            u.display_name AS author_name, u.email AS author_email, u.bio AS author_bio,
            p.slug AS post_slug, p.title AS post_title
     FROM comments cm
     JOIN users u ON u.id = cm.author_id
     JOIN posts p ON p.id = cm.post_id";

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            status,
            author_id,
            post_id,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (content, status, author_id, post_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, content, status, author_id, post_id, created_at, updated_at",
        )
        .bind(content.as_str())
        .bind(status.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(post_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, status, author_id, post_id, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn set_status(&self, id: CommentId, status: CommentStatus) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING id, content, status, author_id, post_id, created_at, updated_at",
        )
        .bind(i64::from(id))
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list(
        &self,
        filter: CommentFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<CommentListing>, u64)> {
        let mut apply = |builder: &mut QueryBuilder<'_, Postgres>| {
            let mut has_where = false;
            if let Some(post_id) = filter.post_id {
                builder.push(" WHERE cm.post_id = ");
                builder.push_bind(i64::from(post_id));
                has_where = true;
            }
            if let Some(status) = filter.status {
                builder.push(if has_where { " AND " } else { " WHERE " });
                builder.push("cm.status = ");
                builder.push_bind(status.as_str());
            }
        };

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM comments cm");
        apply(&mut count_builder);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        apply(&mut builder);
        builder.push(" ORDER BY cm.created_at DESC, cm.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<CommentListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let listings = rows
            .into_iter()
            .map(CommentListing::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((listings, total as u64))
    }

    async fn approved_for_post(&self, post_id: PostId) -> DomainResult<Vec<CommentListing>> {
        let rows = sqlx::query_as::<_, CommentListingRow>(&format!(
            "{LISTING_SELECT} WHERE cm.post_id = $1 AND cm.status = 'APPROVED'
             ORDER BY cm.created_at DESC, cm.id DESC"
        ))
        .bind(i64::from(post_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentListing::try_from).collect()
    }

    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM comments WHERE author_id = $1")
            .bind(i64::from(author_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn status_counts(&self) -> DomainResult<CommentCounts> {
        let (total, pending, approved) = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT COUNT(1),
                    COUNT(1) FILTER (WHERE status = 'PENDING'),
                    COUNT(1) FILTER (WHERE status = 'APPROVED')
             FROM comments",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(CommentCounts {
            total: total as u64,
            pending: pending as u64,
            approved: approved as u64,
        })
    }
}
