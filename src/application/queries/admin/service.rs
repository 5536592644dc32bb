// src/application/queries/admin/service.rs
use std::sync::Arc;

use crate::application::ports::identity::RoleDirectory;
use crate::domain::comment::CommentRepository;
use crate::domain::post::PostRepository;
use crate::domain::user::UserRepository;

pub struct AdminQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) role_directory: Arc<dyn RoleDirectory>,
}

impl AdminQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        role_directory: Arc<dyn RoleDirectory>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
            role_directory,
        }
    }
}
