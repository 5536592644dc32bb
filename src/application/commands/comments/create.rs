// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::application::commands::users::get_or_create_user;
use crate::application::dto::CommentDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::comment::{CommentBody, CommentStatus, NewComment};
use crate::domain::post::PostId;
use crate::domain::user::AuthorRef;

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub content: String,
}

impl CommentCommandService {
    /// New comments always enter as `Pending`; only moderation makes them
    /// visible on the public post page.
    pub async fn create_comment(
        &self,
        identity: Option<&Identity>,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let actor = guard::check_author(identity)?;
        let author =
            get_or_create_user(self.user_repo.as_ref(), self.clock.as_ref(), &actor.identity)
                .await?;

        let post_id = PostId::new(command.post_id)
            .map_err(|e| ApplicationError::invalid_field("postId", e))?;
        let content = CommentBody::new(command.content)
            .map_err(|e| ApplicationError::invalid_field("content", e))?;

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        if !post.is_published() {
            return Err(ApplicationError::precondition_failed(
                "comments can only be added to published posts",
            ));
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                content,
                status: CommentStatus::Pending,
                author_id: author.id,
                post_id,
                created_at: self.clock.now(),
            })
            .await?;

        self.cache.invalidate(&[
            paths::post_detail(post.slug.as_str()),
            paths::admin_comments(),
        ]);
        Ok(CommentDto::from_comment(comment, AuthorRef::from(&author)))
    }
}
