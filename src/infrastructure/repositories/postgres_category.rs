// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryDescription, CategoryId, CategoryListing, CategoryName, CategoryRepository,
    CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description.map(CategoryDescription::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryListingRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    post_count: i64,
}

impl TryFrom<CategoryListingRow> for CategoryListing {
    type Error = DomainError;

    fn try_from(row: CategoryListingRow) -> Result<Self, Self::Error> {
        Ok(CategoryListing {
            category: Category {
                id: CategoryId::new(row.id)?,
                name: CategoryName::new(row.name)?,
                slug: Slug::new(row.slug)?,
                description: row.description.map(CategoryDescription::new).transpose()?,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            post_count: row.post_count as u64,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            description,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, name, slug, description, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(CategoryDescription::as_str))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            description,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            let name: String = name.into();
            builder.push(", name = ");
            builder.push_bind(name);
        }
        if let Some(slug) = slug {
            let slug: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug);
        }
        if let Some(description) = description {
            let description: String = description.into();
            builder.push(", description = ");
            builder.push_bind(description);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, name, slug, description, created_at, updated_at");

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM categories WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<CategoryId>) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM categories WHERE slug = ");
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

    async fn list_with_published_counts(&self) -> DomainResult<Vec<CategoryListing>> {
        let rows = sqlx::query_as::<_, CategoryListingRow>(
            "SELECT c.id, c.name, c.slug, c.description, c.created_at, c.updated_at,
                    (SELECT COUNT(1) FROM posts p
                     WHERE p.category_id = c.id AND p.status = 'PUBLISHED') AS post_count
             FROM categories c
             ORDER BY c.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CategoryListing::try_from).collect()
    }

    async fn published_post_count(&self, id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM posts WHERE category_id = $1 AND status = 'PUBLISHED'",
        )
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }
}
