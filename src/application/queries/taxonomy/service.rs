// src/application/queries/taxonomy/service.rs
use std::sync::Arc;

use crate::domain::category::CategoryRepository;
use crate::domain::tag::TagRepository;

pub struct TaxonomyQueryService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
}

impl TaxonomyQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            category_repo,
            tag_repo,
        }
    }
}
