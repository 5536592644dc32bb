use crate::domain::errors::DomainError;

const CNT_USER_SUBJECT: &str = "users_subject_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_SUBJECT => DomainError::Conflict("subject already exists".into()),
                    CNT_CATEGORY_NAME => {
                        DomainError::Conflict("category name already exists".into())
                    }
                    CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("category slug already exists".into())
                    }
                    CNT_TAG_NAME => DomainError::Conflict("tag name already exists".into()),
                    CNT_TAG_SLUG => DomainError::Conflict("tag slug already exists".into()),
                    CNT_POST_SLUG => DomainError::Conflict("post slug already exists".into()),
                    CNT_POST_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    CNT_POST_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
