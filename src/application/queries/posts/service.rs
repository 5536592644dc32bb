// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::domain::comment::CommentRepository;
use crate::domain::post::PostRepository;
use crate::domain::user::UserRepository;

pub(super) const DEFAULT_PAGE_SIZE: u32 = 10;
pub(super) const MAX_PAGE_SIZE: u32 = 50;

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl PostQueryService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            user_repo,
        }
    }
}
