// src/domain/slug.rs
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};

/// Upper bound on `-N` suffix probes before giving up. Hitting this in
/// practice means something is feeding identical titles in a loop.
const MAX_SLUG_ATTEMPTS: u32 = 200;

/// URL-safe identifier, unique within its owning entity type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Domain service resolving slug collisions against a caller-supplied
/// existence probe. The probe is expected to exclude the entity's own id
/// when generating for an update, so keeping an unchanged title never
/// counts as a collision.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn base_slug(&self, text: &str, fallback: &str) -> String {
        let base = self.generator.slugify(text);
        if base.is_empty() {
            format!("{}-{}", fallback, Utc::now().timestamp())
        } else {
            base
        }
    }

    pub async fn unique_slug<F, Fut>(
        &self,
        text: &str,
        fallback: &str,
        taken: F,
    ) -> DomainResult<Slug>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = DomainResult<bool>> + Send,
    {
        let base = self.base_slug(text, fallback);

        let mut candidate = base.clone();
        let mut counter: u32 = 1;
        loop {
            if !taken(candidate.clone()).await? {
                return Slug::new(candidate);
            }
            if counter > MAX_SLUG_ATTEMPTS {
                return Err(DomainError::SlugExhausted(format!(
                    "no free slug found for '{base}' within {MAX_SLUG_ATTEMPTS} attempts"
                )));
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}
