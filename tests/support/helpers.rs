// tests/support/helpers.rs
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use pressroom::application::commands::posts::CreatePostCommand;
use pressroom::application::commands::taxonomy::CreateCategoryCommand;
use pressroom::application::dto::{CategoryDto, PostDto};
use pressroom::application::guard::Identity;
use pressroom::application::services::ApplicationServices;
use pressroom::domain::post::PostStatus;
use pressroom::domain::user::Role;
use pressroom::infrastructure::util::DefaultSlugGenerator;

use crate::support::mocks::{MemoryDb, MockClock, RecordingCache, StaticRoleDirectory};

pub struct TestHarness {
    pub services: ApplicationServices,
    pub db: MemoryDb,
    pub clock: Arc<MockClock>,
    pub cache: Arc<RecordingCache>,
    pub directory: Arc<StaticRoleDirectory>,
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn harness() -> TestHarness {
    let db = MemoryDb::new();
    let clock = Arc::new(MockClock::new(epoch()));
    let cache = Arc::new(RecordingCache::default());
    let directory = Arc::new(StaticRoleDirectory::default());

    let services = ApplicationServices::new(
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::clone(&directory) as Arc<dyn pressroom::application::ports::identity::RoleDirectory>,
        Arc::clone(&clock) as Arc<dyn pressroom::application::ports::time::Clock>,
        Arc::new(DefaultSlugGenerator),
        Arc::clone(&cache) as Arc<dyn pressroom::application::ports::cache::CacheInvalidator>,
    );

    TestHarness {
        services,
        db,
        clock,
        cache,
        directory,
    }
}

pub fn author(subject: &str) -> Identity {
    Identity {
        subject: subject.to_string(),
        email: format!("{subject}@example.com"),
        display_name: Some("Test Author".to_string()),
        role_claim: None,
    }
}

pub fn admin(subject: &str) -> Identity {
    Identity {
        subject: subject.to_string(),
        email: format!("{subject}@example.com"),
        display_name: Some("Test Admin".to_string()),
        role_claim: Some(Role::Admin),
    }
}

pub fn body(text: &str) -> serde_json::Value {
    json!({
        "type": "doc",
        "content": [
            { "type": "paragraph", "content": [{ "type": "text", "text": text }] }
        ]
    })
}

impl TestHarness {
    pub async fn seed_category(&self, name: &str) -> CategoryDto {
        self.services
            .taxonomy_commands
            .create_category(
                Some(&admin("seed-admin")),
                CreateCategoryCommand {
                    name: name.to_string(),
                    description: None,
                },
            )
            .await
            .expect("seed category")
    }

    pub async fn seed_post(
        &self,
        identity: &Identity,
        title: &str,
        category_id: i64,
        status: PostStatus,
    ) -> PostDto {
        self.services
            .post_commands
            .create_post(
                Some(identity),
                CreatePostCommand {
                    title: title.to_string(),
                    content: body(title),
                    excerpt: None,
                    cover_image: None,
                    category_id,
                    tag_ids: Vec::new(),
                    status,
                },
            )
            .await
            .expect("seed post")
    }
}
