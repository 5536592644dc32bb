// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::application::ports::{identity::RoleDirectory, time::Clock};
use crate::domain::post::PostRepository;
use crate::domain::user::UserRepository;

pub(super) const DEFAULT_PAGE_SIZE: u32 = 20;
pub(super) const MAX_PAGE_SIZE: u32 = 100;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) role_directory: Arc<dyn RoleDirectory>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        role_directory: Arc<dyn RoleDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            role_directory,
            clock,
        }
    }
}
