// src/application/queries/posts/by_id.rs
use super::PostQueryService;
use crate::application::dto::PostDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::domain::post::{CanModifyPostSpec, PostId};
use crate::domain::user::SubjectId;

impl PostQueryService {
    /// Editor fetch: the owning author or an admin may load a post in any
    /// status by id.
    pub async fn get_post_by_id(
        &self,
        identity: Option<&Identity>,
        id: i64,
    ) -> ApplicationResult<PostDto> {
        let actor = guard::check_author(identity)?;
        let subject = SubjectId::new(actor.identity.subject.clone())?;
        let user = self
            .user_repo
            .find_by_subject(&subject)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let id = PostId::new(id).map_err(|e| ApplicationError::invalid_field("id", e))?;
        let listing = self
            .post_repo
            .listing_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(actor.role, user.id, &listing.post).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you do not have permission to access this post",
            ));
        }
        Ok(listing.into())
    }
}
