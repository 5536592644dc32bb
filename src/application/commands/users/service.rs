// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::ports::{cache::CacheInvalidator, time::Clock};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) cache: Arc<dyn CacheInvalidator>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            user_repo,
            clock,
            cache,
        }
    }
}
