// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::application::commands::users::get_or_create_user;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::application::ports::cache::paths;
use crate::domain::post::{PostId, specifications::CanModifyPostSpec};

impl PostCommandService {
    /// Removes the post together with its comments and tag associations.
    pub async fn delete_post(
        &self,
        identity: Option<&Identity>,
        id: i64,
    ) -> ApplicationResult<()> {
        let actor = guard::check_author(identity)?;
        let caller =
            get_or_create_user(self.user_repo.as_ref(), self.clock.as_ref(), &actor.identity)
                .await?;

        let id = PostId::new(id).map_err(|e| ApplicationError::invalid_field("id", e))?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(actor.role, caller.id, &post).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you do not have permission to delete this post",
            ));
        }

        self.post_repo.delete(id).await?;
        self.cache.invalidate(&[
            paths::home(),
            paths::dashboard_posts(),
            paths::post_detail(post.slug.as_str()),
        ]);
        Ok(())
    }
}
