// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_comment;
mod postgres_post;
mod postgres_tag;
mod postgres_user;

pub use error::map_sqlx;

/// Escapes LIKE/ILIKE metacharacters so user input matches literally.
/// Queries using the result must carry an `ESCAPE '\'` clause.
pub(crate) fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
