// src/application/ports/cache.rs

/// Fire-and-forget invalidation signal sent after successful mutations.
/// Implementations must not block the calling operation and have no way to
/// fail it.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, paths: &[String]);
}

/// Logical cache paths affected by mutations. Mirrors the public site's
/// route shape so the host can map them onto its own cache keys.
pub mod paths {
    pub fn home() -> String {
        "/".into()
    }

    pub fn dashboard_posts() -> String {
        "/dashboard/posts".into()
    }

    pub fn dashboard_profile() -> String {
        "/dashboard/profile".into()
    }

    pub fn post_detail(slug: &str) -> String {
        format!("/posts/{slug}")
    }

    pub fn category_detail(slug: &str) -> String {
        format!("/categories/{slug}")
    }

    pub fn author_profile(id: i64) -> String {
        format!("/authors/{id}")
    }

    pub fn admin_categories() -> String {
        "/admin/categories".into()
    }

    pub fn admin_comments() -> String {
        "/admin/comments".into()
    }
}
