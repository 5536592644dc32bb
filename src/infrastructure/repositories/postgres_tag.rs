// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::tag::{NewTag, Tag, TagId, TagListing, TagName, TagRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagListingRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    post_count: i64,
}

impl TryFrom<TagListingRow> for TagListing {
    type Error = DomainError;

    fn try_from(row: TagListingRow) -> Result<Self, Self::Error> {
        Ok(TagListing {
            tag: Tag {
                id: TagId::new(row.id)?,
                name: TagName::new(row.name)?,
                slug: Slug::new(row.slug)?,
                created_at: row.created_at,
            },
            post_count: row.post_count as u64,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let NewTag {
            name,
            slug,
            created_at,
        } = tag;

        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, slug, created_at) VALUES ($1, $2, $3)
             RETURNING id, name, slug, created_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn insert_many_skip_duplicates(&self, tags: Vec<NewTag>) -> DomainResult<()> {
        if tags.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO tags (name, slug, created_at) ");
        builder.push_values(tags, |mut b, tag| {
            b.push_bind(String::from(tag.name));
            b.push_bind(String::from(tag.slug));
            b.push_bind(tag.created_at);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE id = ANY($1) ORDER BY name",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let names: Vec<&str> = names.iter().map(TagName::as_str).collect();
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE name = ANY($1) ORDER BY name",
        )
        .bind(&names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tags WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn search_by_name(&self, needle: &str, limit: u32) -> DomainResult<Vec<Tag>> {
        let pattern = format!("%{}%", super::escape_like(needle));
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags
             WHERE name ILIKE $1 ESCAPE '\\' ORDER BY name LIMIT $2",
        )
        .bind(&pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_with_published_counts(&self) -> DomainResult<Vec<TagListing>> {
        let rows = sqlx::query_as::<_, TagListingRow>(
            "SELECT t.id, t.name, t.slug, t.created_at,
                    (SELECT COUNT(1) FROM post_tags pt
                     JOIN posts p ON p.id = pt.post_id
                     WHERE pt.tag_id = t.id AND p.status = 'PUBLISHED') AS post_count
             FROM tags t
             ORDER BY t.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TagListing::try_from).collect()
    }

    async fn published_post_count(&self, id: TagId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM post_tags pt
             JOIN posts p ON p.id = pt.post_id
             WHERE pt.tag_id = $1 AND p.status = 'PUBLISHED'",
        )
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }
}
