// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, posts::PostCommandService,
            taxonomy::TaxonomyCommandService, users::UserCommandService,
        },
        ports::{
            cache::CacheInvalidator, identity::RoleDirectory, time::Clock, util::SlugGenerator,
        },
        queries::{
            admin::AdminQueryService, comments::CommentQueryService, posts::PostQueryService,
            taxonomy::TaxonomyQueryService, users::UserQueryService,
        },
    },
    domain::{
        category::CategoryRepository, comment::CommentRepository, post::PostRepository,
        slug::UniqueSlugService, tag::TagRepository, user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
    pub admin_queries: Arc<AdminQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        role_directory: Arc<dyn RoleDirectory>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(Arc::clone(&slugger)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
            Arc::clone(&cache),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&user_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            Arc::clone(&cache),
        ));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&post_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            Arc::clone(&cache),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
            Arc::clone(&cache),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&user_repo),
        ));
        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&post_repo),
            Arc::clone(&role_directory),
            Arc::clone(&clock),
        ));
        let admin_queries = Arc::new(AdminQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&post_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&role_directory),
        ));

        Self {
            user_commands,
            post_commands,
            taxonomy_commands,
            comment_commands,
            post_queries,
            taxonomy_queries,
            comment_queries,
            user_queries,
            admin_queries,
        }
    }
}
