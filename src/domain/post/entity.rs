// src/domain/post/entity.rs
use crate::domain::category::{Category, CategoryId};
use crate::domain::post::content::PostContent;
use crate::domain::post::value_objects::{CoverImage, Excerpt, PostId, PostStatus, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::tag::Tag;
use crate::domain::user::{AuthorRef, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<Excerpt>,
    pub cover_image: Option<CoverImage>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Applies a status transition. `published_at` is stamped only on the
    /// first Draft→Published edge; unpublishing keeps the original stamp so
    /// publication history survives.
    pub fn set_status(&mut self, status: PostStatus, now: DateTime<Utc>) {
        if status == PostStatus::Published
            && self.status == PostStatus::Draft
            && self.published_at.is_none()
        {
            self.published_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<Excerpt>,
    pub cover_image: Option<CoverImage>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub excerpt: Option<Excerpt>,
    pub cover_image: Option<CoverImage>,
    pub category_id: Option<CategoryId>,
    pub publish_state: Option<PublishStateUpdate>,
    /// `Some(vec)` replaces every tag association, including `Some(vec![])`
    /// which clears them; `None` leaves associations untouched.
    pub replace_tags: Option<Vec<crate::domain::tag::TagId>>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            cover_image: None,
            category_id: None,
            publish_state: None,
            replace_tags: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle, slug: Slug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Excerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_cover_image(mut self, cover_image: CoverImage) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: PostStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            status,
            published_at,
        });
        self
    }

    pub fn with_replace_tags(mut self, tag_ids: Vec<crate::domain::tag::TagId>) -> Self {
        self.replace_tags = Some(tag_ids);
        self
    }
}

/// Post with its relations resolved, as listings and detail views need it.
#[derive(Debug, Clone)]
pub struct PostListing {
    pub post: Post,
    pub author: AuthorRef,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub comment_count: u64,
}
