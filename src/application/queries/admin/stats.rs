// src/application/queries/admin/stats.rs
use super::AdminQueryService;
use crate::application::dto::DashboardStatsDto;
use crate::application::error::ApplicationResult;
use crate::application::guard::{self, Identity};

impl AdminQueryService {
    /// Dashboard overview counters: posts and comments by status.
    pub async fn get_dashboard_stats(
        &self,
        identity: Option<&Identity>,
    ) -> ApplicationResult<DashboardStatsDto> {
        guard::check_admin(identity)?;

        let posts = self.post_repo.status_counts().await?;
        let comments = self.comment_repo.status_counts().await?;
        Ok(DashboardStatsDto::from_counts(posts, comments))
    }
}
