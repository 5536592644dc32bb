// src/application/queries/admin/user_detail.rs
use super::AdminQueryService;
use crate::application::dto::UserDetailDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::guard::{self, Identity};
use crate::domain::user::{Role, UserId};

const RECENT_POST_LIMIT: u32 = 5;

impl AdminQueryService {
    /// Single-user detail for the admin directory: profile, activity
    /// counts, and the latest posts. The role comes from the identity
    /// directory; a failed lookup degrades to `Author` rather than hiding
    /// the user.
    pub async fn get_user_by_id(
        &self,
        identity: Option<&Identity>,
        id: i64,
    ) -> ApplicationResult<UserDetailDto> {
        guard::check_admin(identity)?;

        let id = UserId::new(id).map_err(|_| ApplicationError::not_found("user not found"))?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let post_count = self.post_repo.count_by_author(user.id).await?;
        let comment_count = self.comment_repo.count_by_author(user.id).await?;
        let recent_posts = self
            .post_repo
            .recent_by_author(user.id, RECENT_POST_LIMIT)
            .await?;

        let role = match self.role_directory.role_of(user.subject.as_str()).await {
            Ok(claim) => claim.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(
                    user_id = i64::from(user.id),
                    error = %err,
                    "role lookup failed, defaulting to author"
                );
                Role::Author
            }
        };

        Ok(UserDetailDto {
            id: user.id.into(),
            email: user.email.into(),
            name: user.display_name.map(Into::into),
            bio: user.bio.map(Into::into),
            role,
            post_count,
            comment_count,
            recent_posts: recent_posts.into_iter().map(Into::into).collect(),
            created_at: user.created_at,
        })
    }
}
