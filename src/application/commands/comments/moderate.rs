// src/application/commands/comments/moderate.rs
use super::CommentCommandService;
use crate::application::dto::CommentDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::comment::{CommentId, CommentStatus};
use crate::domain::user::AuthorRef;

impl CommentCommandService {
    /// Idempotent: approving an already approved comment is a no-op that
    /// still returns the current state.
    pub async fn approve_comment(
        &self,
        identity: Option<&Identity>,
        id: i64,
    ) -> ApplicationResult<CommentDto> {
        guard::check_admin(identity)?;

        let id = CommentId::new(id).map_err(|e| ApplicationError::invalid_field("id", e))?;
        let existing = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let approved = if existing.status == CommentStatus::Approved {
            existing
        } else {
            self.comment_repo
                .set_status(id, CommentStatus::Approved)
                .await?
        };

        let author = self
            .user_repo
            .find_by_id(approved.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment author not found"))?;

        if let Some(post) = self.post_repo.find_by_id(approved.post_id).await? {
            self.cache.invalidate(&[
                paths::post_detail(post.slug.as_str()),
                paths::admin_comments(),
            ]);
        } else {
            self.cache.invalidate(&[paths::admin_comments()]);
        }
        Ok(CommentDto::from_comment(approved, AuthorRef::from(&author)))
    }

    /// Rejection removes the row outright, whatever state it is in.
    pub async fn reject_comment(
        &self,
        identity: Option<&Identity>,
        id: i64,
    ) -> ApplicationResult<()> {
        guard::check_admin(identity)?;

        let id = CommentId::new(id).map_err(|e| ApplicationError::invalid_field("id", e))?;
        let existing = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        self.comment_repo.delete(id).await?;

        if let Some(post) = self.post_repo.find_by_id(existing.post_id).await? {
            self.cache.invalidate(&[
                paths::post_detail(post.slug.as_str()),
                paths::admin_comments(),
            ]);
        } else {
            self.cache.invalidate(&[paths::admin_comments()]);
        }
        Ok(())
    }
}
