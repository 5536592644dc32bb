// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::application::ports::{cache::CacheInvalidator, time::Clock};
use crate::domain::comment::CommentRepository;
use crate::domain::post::PostRepository;
use crate::domain::user::UserRepository;

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) cache: Arc<dyn CacheInvalidator>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            user_repo,
            clock,
            cache,
        }
    }
}
