// src/infrastructure/repositories/postgres_post.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::category::{Category, CategoryDescription, CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    CommentScope, CoverImage, Excerpt, NewPost, Post, PostContent, PostCounts, PostFilter,
    PostId, PostListing, PostOrder, PostRepository, PostStatus, PostTitle, PostUpdate,
};
use crate::domain::slug::Slug;
use crate::domain::tag::{Tag, TagId, TagName};
use crate::domain::user::{AuthorRef, Bio, DisplayName, Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, cover_image, status, \
     published_at, author_id, category_id, created_at, updated_at";

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: serde_json::Value,
    excerpt: Option<String>,
    cover_image: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: PostContent::new(row.content),
            excerpt: row.excerpt.map(Excerpt::new).transpose()?,
            cover_image: row.cover_image.map(CoverImage::new).transpose()?,
            status: row.status.parse()?,
            published_at: row.published_at,
            author_id: UserId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Post with author, category and comment count joined in. Tags are
/// attached afterwards from a single batched lookup.
#[derive(Debug, FromRow)]
struct PostListingRow {
    id: i64,
    title: String,
    slug: String,
    content: serde_json::Value,
    excerpt: Option<String>,
    cover_image: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: Option<String>,
    author_email: String,
    author_bio: Option<String>,
    category_name: String,
    category_slug: String,
    category_description: Option<String>,
    category_created_at: DateTime<Utc>,
    category_updated_at: DateTime<Utc>,
    comment_count: i64,
}

impl PostListingRow {
    fn into_listing(self, tags: Vec<Tag>) -> DomainResult<PostListing> {
        let author = AuthorRef {
            id: UserId::new(self.author_id)?,
            name: self.author_name.map(DisplayName::new).transpose()?,
            email: Email::new(self.author_email)?,
            bio: self.author_bio.map(Bio::new).transpose()?,
        };
        let category = Category {
            id: CategoryId::new(self.category_id)?,
            name: CategoryName::new(self.category_name)?,
            slug: Slug::new(self.category_slug)?,
            description: self
                .category_description
                .map(CategoryDescription::new)
                .transpose()?,
            created_at: self.category_created_at,
            updated_at: self.category_updated_at,
        };
        let comment_count = self.comment_count as u64;
        let post = Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            content: PostContent::new(self.content),
            excerpt: self.excerpt.map(Excerpt::new).transpose()?,
            cover_image: self.cover_image.map(CoverImage::new).transpose()?,
            status: self.status.parse()?,
            published_at: self.published_at,
            author_id: author.id,
            category_id: category.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        Ok(PostListing {
            post,
            author,
            category,
            tags,
            comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl PostgresPostRepository {
    fn listing_select<'a>(comment_scope: CommentScope) -> QueryBuilder<'a, Postgres> {
        let comment_filter = match comment_scope {
            CommentScope::Approved => " AND cm.status = 'APPROVED'",
            CommentScope::All => "",
        };
        QueryBuilder::new(format!(
            "SELECT p.id, p.title, p.slug, p.content, p.excerpt, p.cover_image, p.status,
                    p.published_at, p.author_id, p.category_id, p.created_at, p.updated_at,
                    u.display_name AS author_name, u.email AS author_email, u.bio AS author_bio,
                    c.name AS category_name, c.slug AS category_slug,
                    c.description AS category_description,
                    c.created_at AS category_created_at, c.updated_at AS category_updated_at,
                    (SELECT COUNT(1) FROM comments cm
                     WHERE cm.post_id = p.id{comment_filter}) AS comment_count
             FROM posts p
             JOIN users u ON u.id = p.author_id
             JOIN categories c ON c.id = p.category_id"
        ))
    }

    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a PostFilter) {
        let mut has_where = false;
        let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
        };

        if let Some(status) = filter.status {
            push_clause(builder);
            builder.push("p.status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(category_slug) = &filter.category_slug {
            push_clause(builder);
            builder.push("c.slug = ");
            builder.push_bind(category_slug.as_str());
        }
        if let Some(tag_slug) = &filter.tag_slug {
            push_clause(builder);
            builder.push(
                "EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id \
                 WHERE pt.post_id = p.id AND t.slug = ",
            );
            builder.push_bind(tag_slug.as_str());
            builder.push(")");
        }
        if let Some(author_id) = filter.author_id {
            push_clause(builder);
            builder.push("p.author_id = ");
            builder.push_bind(i64::from(author_id));
        }
    }

    fn apply_order(builder: &mut QueryBuilder<'_, Postgres>, order: PostOrder) {
        match order {
            PostOrder::PublishedAtDesc => {
                builder.push(" ORDER BY p.published_at DESC NULLS LAST, p.id DESC");
            }
            PostOrder::UpdatedAtDesc => {
                builder.push(" ORDER BY p.updated_at DESC, p.id DESC");
            }
        }
    }

    async fn tags_for_posts(&self, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query_as::<_, PostTagRow>(
            "SELECT pt.post_id, t.id, t.name, t.slug, t.created_at
             FROM post_tags pt
             JOIN tags t ON t.id = pt.tag_id
             WHERE pt.post_id = ANY($1)
             ORDER BY t.name",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            let tag = Tag {
                id: TagId::new(row.id)?,
                name: TagName::new(row.name)?,
                slug: Slug::new(row.slug)?,
                created_at: row.created_at,
            };
            by_post.entry(row.post_id).or_default().push(tag);
        }
        Ok(by_post)
    }

    async fn attach_tags(&self, rows: Vec<PostListingRow>) -> DomainResult<Vec<PostListing>> {
        let post_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags = self.tags_for_posts(&post_ids).await?;
        rows.into_iter()
            .map(|row| {
                let post_tags = tags.remove(&row.id).unwrap_or_default();
                row.into_listing(post_tags)
            })
            .collect()
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost, tag_ids: &[TagId]) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            cover_image,
            status,
            published_at,
            author_id,
            category_id,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, excerpt, cover_image, status,
                                published_at, author_id, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_value())
        .bind(excerpt.as_ref().map(Excerpt::as_str))
        .bind(cover_image.as_ref().map(CoverImage::as_str))
        .bind(status.as_str())
        .bind(published_at)
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(i64::from(*tag_id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            cover_image,
            category_id,
            publish_state,
            replace_tags,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(slug) = slug {
            let slug: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_value());
        }
        if let Some(excerpt) = excerpt {
            let excerpt: String = excerpt.into();
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(cover_image) = cover_image {
            let cover_image: String = cover_image.into();
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(state) = publish_state {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(&format!(" RETURNING {POST_COLUMNS}"));

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(tag_ids) = replace_tags {
            sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            for tag_id in tag_ids {
                sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
                    .bind(i64::from(id))
                    .bind(i64::from(tag_id))
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;
            }
        }

        tx.commit().await.map_err(map_sqlx)?;
        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        // Comments and tag joins go with the post via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<PostId>) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM posts WHERE slug = ");
        builder.push_bind(slug);
        if let Some(exclude) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(exclude));
        }
        builder.push(")");

        builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        filter: PostFilter,
        order: PostOrder,
        comment_scope: CommentScope,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<PostListing>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT COUNT(1) FROM posts p JOIN categories c ON c.id = p.category_id",
        );
        Self::apply_filter(&mut count_builder, &filter);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder = Self::listing_select(comment_scope);
        Self::apply_filter(&mut builder, &filter);
        Self::apply_order(&mut builder, order);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<PostListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let listings = self.attach_tags(rows).await?;
        Ok((listings, total as u64))
    }

    async fn search_published(
        &self,
        needle: &str,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<PostListing>, u64)> {
        let pattern = format!("%{}%", super::escape_like(needle));

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM posts p
             WHERE p.status = 'PUBLISHED'
               AND (p.title ILIKE $1 ESCAPE '\\' OR p.excerpt ILIKE $1 ESCAPE '\\')",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut builder = Self::listing_select(CommentScope::Approved);
        builder.push(" WHERE p.status = 'PUBLISHED' AND (p.title ILIKE ");
        builder.push_bind(&pattern);
        builder.push(" ESCAPE '\\' OR p.excerpt ILIKE ");
        builder.push_bind(&pattern);
        builder.push(" ESCAPE '\\')");
        Self::apply_order(&mut builder, PostOrder::PublishedAtDesc);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<PostListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let listings = self.attach_tags(rows).await?;
        Ok((listings, total as u64))
    }

    async fn listing_by_id(&self, id: PostId) -> DomainResult<Option<PostListing>> {
        let mut builder = Self::listing_select(CommentScope::Approved);
        builder.push(" WHERE p.id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<PostListingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let listings = self.attach_tags(vec![row]).await?;
                Ok(listings.into_iter().next())
            }
            None => Ok(None),
        }
    }

    async fn count_by_category(&self, id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM posts WHERE category_id = $1")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn count_published_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM posts WHERE author_id = $1 AND status = 'PUBLISHED'",
        )
        .bind(i64::from(author_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM posts WHERE author_id = $1")
            .bind(i64::from(author_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn recent_by_author(&self, author_id: UserId, limit: u32) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE author_id = $1
             ORDER BY created_at DESC, id DESC LIMIT $2"
        ))
        .bind(i64::from(author_id))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn status_counts(&self) -> DomainResult<PostCounts> {
        let (total, published, draft) = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT COUNT(1),
                    COUNT(1) FILTER (WHERE status = 'PUBLISHED'),
                    COUNT(1) FILTER (WHERE status = 'DRAFT')
             FROM posts",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(PostCounts {
            total: total as u64,
            published: published as u64,
            draft: draft as u64,
        })
    }
}
