// tests/support/mocks.rs
//
// In-memory repository implementations backed by one shared store, so the
// cross-entity read models (listings with authors, categories, tags and
// comment counts) behave like their SQL counterparts.
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pressroom::application::ports::cache::CacheInvalidator;
use pressroom::application::ports::identity::RoleDirectory;
use pressroom::application::ports::time::Clock;
use pressroom::domain::category::{
    Category, CategoryId, CategoryListing, CategoryName, CategoryRepository, CategoryUpdate,
    NewCategory,
};
use pressroom::domain::comment::{
    Comment, CommentCounts, CommentFilter, CommentId, CommentListing, CommentPostRef,
    CommentRepository, CommentStatus, NewComment,
};
use pressroom::domain::errors::{DomainError, DomainResult};
use pressroom::domain::post::{
    CommentScope, NewPost, Post, PostCounts, PostFilter, PostId, PostListing, PostOrder,
    PostRepository, PostStatus, PostUpdate,
};
use pressroom::domain::slug::Slug;
use pressroom::domain::tag::{NewTag, Tag, TagId, TagListing, TagName, TagRepository};
use pressroom::domain::user::{
    AuthorRef, NewUser, ProfileUpdate, Role, SubjectId, User, UserId, UserListing, UserRepository,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    posts: Vec<Post>,
    post_tags: Vec<(i64, i64)>,
    comments: Vec<Comment>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn tags_of(&self, post_id: i64) -> Vec<Tag> {
        let ids: HashSet<i64> = self
            .post_tags
            .iter()
            .filter(|(p, _)| *p == post_id)
            .map(|(_, t)| *t)
            .collect();
        let mut tags: Vec<Tag> = self
            .tags
            .iter()
            .filter(|tag| ids.contains(&i64::from(tag.id)))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        tags
    }

    fn comment_count(&self, post_id: i64, scope: CommentScope) -> u64 {
        self.comments
            .iter()
            .filter(|c| i64::from(c.post_id) == post_id)
            .filter(|c| match scope {
                CommentScope::Approved => c.status == CommentStatus::Approved,
                CommentScope::All => true,
            })
            .count() as u64
    }

    fn listing_of(&self, post: &Post, scope: CommentScope) -> PostListing {
        let author = self
            .users
            .iter()
            .find(|u| u.id == post.author_id)
            .map(AuthorRef::from)
            .expect("post author must exist");
        let category = self
            .categories
            .iter()
            .find(|c| c.id == post.category_id)
            .cloned()
            .expect("post category must exist");
        PostListing {
            post: post.clone(),
            author,
            category,
            tags: self.tags_of(i64::from(post.id)),
            comment_count: self.comment_count(i64::from(post.id), scope),
        }
    }

    fn published_count_for_category(&self, id: CategoryId) -> u64 {
        self.posts
            .iter()
            .filter(|p| p.category_id == id && p.status == PostStatus::Published)
            .count() as u64
    }

    fn published_count_for_tag(&self, id: TagId) -> u64 {
        self.post_tags
            .iter()
            .filter(|(_, t)| *t == i64::from(id))
            .filter(|(p, _)| {
                self.posts
                    .iter()
                    .any(|post| i64::from(post.id) == *p && post.status == PostStatus::Published)
            })
            .count() as u64
    }
}

#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Mutex<Tables>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

/* -------------------------------- UserRepository -------------------------------- */

#[async_trait]
impl UserRepository for MemoryDb {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut tables = self.inner.lock().unwrap();
        if tables.users.iter().any(|u| u.subject == user.subject) {
            return Err(DomainError::Conflict("subject already exists".into()));
        }
        let id = tables.next_id();
        let created = User {
            id: UserId::new(id)?,
            subject: user.subject,
            email: user.email,
            display_name: user.display_name,
            bio: None,
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_subject(&self, subject: &SubjectId) -> DomainResult<Option<User>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.subject == subject).cloned())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User> {
        let mut tables = self.inner.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.display_name = Some(update.display_name);
        user.bio = update.bio;
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn list_page(
        &self,
        limit: u32,
        offset: u64,
        search: Option<&str>,
    ) -> DomainResult<(Vec<UserListing>, u64)> {
        let tables = self.inner.lock().unwrap();
        let needle = search.map(str::to_lowercase);
        let mut matched: Vec<&User> = tables
            .users
            .iter()
            .filter(|u| match &needle {
                Some(needle) => {
                    u.email.as_str().to_lowercase().contains(needle)
                        || u.display_name
                            .as_ref()
                            .is_some_and(|n| n.as_str().to_lowercase().contains(needle))
                }
                None => true,
            })
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|user| UserListing {
                user: user.clone(),
                post_count: tables
                    .posts
                    .iter()
                    .filter(|p| p.author_id == user.id)
                    .count() as u64,
                comment_count: tables
                    .comments
                    .iter()
                    .filter(|c| c.author_id == user.id)
                    .count() as u64,
            })
            .collect();
        Ok((page, total))
    }
}

/* -------------------------------- CategoryRepository -------------------------------- */

#[async_trait]
impl CategoryRepository for MemoryDb {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.inner.lock().unwrap();
        if tables.categories.iter().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        if tables.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let id = tables.next_id();
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut tables = self.inner.lock().unwrap();
        let category = tables
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = Some(description);
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.inner.lock().unwrap();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.categories.iter().find(|c| &c.name == name).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.categories.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<CategoryId>) -> DomainResult<bool> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .categories
            .iter()
            .any(|c| c.slug.as_str() == slug && Some(c.id) != exclude))
    }

    async fn list_with_published_counts(&self) -> DomainResult<Vec<CategoryListing>> {
        let tables = self.inner.lock().unwrap();
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories
            .into_iter()
            .map(|category| {
                let post_count = tables.published_count_for_category(category.id);
                CategoryListing {
                    category,
                    post_count,
                }
            })
            .collect())
    }

    async fn published_post_count(&self, id: CategoryId) -> DomainResult<u64> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.published_count_for_category(id))
    }
}

/* -------------------------------- TagRepository -------------------------------- */

#[async_trait]
impl TagRepository for MemoryDb {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut tables = self.inner.lock().unwrap();
        if tables.tags.iter().any(|t| t.name == tag.name) {
            return Err(DomainError::Conflict("tag name already exists".into()));
        }
        if tables.tags.iter().any(|t| t.slug == tag.slug) {
            return Err(DomainError::Conflict("tag slug already exists".into()));
        }
        let id = tables.next_id();
        let created = Tag {
            id: TagId::new(id)?,
            name: tag.name,
            slug: tag.slug,
            created_at: tag.created_at,
        };
        tables.tags.push(created.clone());
        Ok(created)
    }

    async fn insert_many_skip_duplicates(&self, tags: Vec<NewTag>) -> DomainResult<()> {
        let mut tables = self.inner.lock().unwrap();
        for tag in tags {
            let duplicate = tables
                .tags
                .iter()
                .any(|t| t.name == tag.name || t.slug == tag.slug);
            if duplicate {
                continue;
            }
            let id = tables.next_id();
            tables.tags.push(Tag {
                id: TagId::new(id)?,
                name: tag.name,
                slug: tag.slug,
                created_at: tag.created_at,
            });
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.tags.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let tables = self.inner.lock().unwrap();
        let wanted: HashSet<TagId> = ids.iter().copied().collect();
        Ok(tables
            .tags
            .iter()
            .filter(|t| wanted.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.tags.iter().find(|t| &t.name == name).cloned())
    }

    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        let tables = self.inner.lock().unwrap();
        let wanted: HashSet<&TagName> = names.iter().collect();
        let mut tags: Vec<Tag> = tables
            .tags
            .iter()
            .filter(|t| wanted.contains(&t.name))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.tags.iter().find(|t| &t.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.tags.iter().any(|t| t.slug.as_str() == slug))
    }

    async fn search_by_name(&self, needle: &str, limit: u32) -> DomainResult<Vec<Tag>> {
        let tables = self.inner.lock().unwrap();
        let needle = needle.to_lowercase();
        let mut tags: Vec<Tag> = tables
            .tags
            .iter()
            .filter(|t| t.name.as_str().contains(&needle))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        tags.truncate(limit as usize);
        Ok(tags)
    }

    async fn list_with_published_counts(&self) -> DomainResult<Vec<TagListing>> {
        let tables = self.inner.lock().unwrap();
        let mut tags = tables.tags.clone();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags
            .into_iter()
            .map(|tag| {
                let post_count = tables.published_count_for_tag(tag.id);
                TagListing { tag, post_count }
            })
            .collect())
    }

    async fn published_post_count(&self, id: TagId) -> DomainResult<u64> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.published_count_for_tag(id))
    }
}

/* -------------------------------- PostRepository -------------------------------- */

fn order_posts(posts: &mut [Post], order: PostOrder) {
    match order {
        PostOrder::PublishedAtDesc => posts.sort_by(|a, b| match (b.published_at, a.published_at) {
            (Some(b_at), Some(a_at)) => b_at
                .cmp(&a_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id))),
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (None, None) => i64::from(b.id).cmp(&i64::from(a.id)),
        }),
        PostOrder::UpdatedAtDesc => posts.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        }),
    }
}

#[async_trait]
impl PostRepository for MemoryDb {
    async fn insert(&self, post: NewPost, tag_ids: &[TagId]) -> DomainResult<Post> {
        let mut tables = self.inner.lock().unwrap();
        if tables.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }
        let id = tables.next_id();
        let created = Post {
            id: PostId::new(id)?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            cover_image: post.cover_image,
            status: post.status,
            published_at: post.published_at,
            author_id: post.author_id,
            category_id: post.category_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        tables.posts.push(created.clone());
        for tag_id in tag_ids {
            tables.post_tags.push((id, i64::from(*tag_id)));
        }
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tables = self.inner.lock().unwrap();
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(cover_image) = update.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(state) = update.publish_state {
            post.status = state.status;
            post.published_at = state.published_at;
        }
        post.updated_at = update.updated_at;
        let updated = post.clone();
        if let Some(tag_ids) = update.replace_tags {
            let post_id = i64::from(update.id);
            tables.post_tags.retain(|(p, _)| *p != post_id);
            for tag_id in tag_ids {
                tables.post_tags.push((post_id, i64::from(tag_id)));
            }
        }
        Ok(updated)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tables = self.inner.lock().unwrap();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        let raw = i64::from(id);
        tables.post_tags.retain(|(p, _)| *p != raw);
        tables.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<PostId>) -> DomainResult<bool> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .any(|p| p.slug.as_str() == slug && Some(p.id) != exclude))
    }

    async fn list(
        &self,
        filter: PostFilter,
        order: PostOrder,
        comment_scope: CommentScope,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<PostListing>, u64)> {
        let tables = self.inner.lock().unwrap();
        let category_id = match &filter.category_slug {
            Some(slug) => {
                let found = tables
                    .categories
                    .iter()
                    .find(|c| c.slug.as_str() == slug)
                    .map(|c| c.id);
                if found.is_none() {
                    return Ok((Vec::new(), 0));
                }
                found
            }
            None => None,
        };
        let tag_id = match &filter.tag_slug {
            Some(slug) => {
                let found = tables
                    .tags
                    .iter()
                    .find(|t| t.slug.as_str() == slug)
                    .map(|t| i64::from(t.id));
                if found.is_none() {
                    return Ok((Vec::new(), 0));
                }
                found
            }
            None => None,
        };

        let mut matched: Vec<Post> = tables
            .posts
            .iter()
            .filter(|p| filter.status.is_none_or(|status| p.status == status))
            .filter(|p| category_id.is_none_or(|id| p.category_id == id))
            .filter(|p| {
                tag_id.is_none_or(|id| {
                    tables
                        .post_tags
                        .iter()
                        .any(|(post, tag)| *post == i64::from(p.id) && *tag == id)
                })
            })
            .filter(|p| filter.author_id.is_none_or(|id| p.author_id == id))
            .cloned()
            .collect();
        order_posts(&mut matched, order);
        let total = matched.len() as u64;
        let listings = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|post| tables.listing_of(&post, comment_scope))
            .collect();
        Ok((listings, total))
    }

    async fn search_published(
        &self,
        needle: &str,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<PostListing>, u64)> {
        let tables = self.inner.lock().unwrap();
        let needle = needle.to_lowercase();
        let mut matched: Vec<Post> = tables
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .filter(|p| {
                p.title.as_str().to_lowercase().contains(&needle)
                    || p.excerpt
                        .as_ref()
                        .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        order_posts(&mut matched, PostOrder::PublishedAtDesc);
        let total = matched.len() as u64;
        let listings = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|post| tables.listing_of(&post, CommentScope::Approved))
            .collect();
        Ok((listings, total))
    }

    async fn listing_by_id(&self, id: PostId) -> DomainResult<Option<PostListing>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|post| tables.listing_of(post, CommentScope::Approved)))
    }

    async fn count_by_category(&self, id: CategoryId) -> DomainResult<u64> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.category_id == id)
            .count() as u64)
    }

    async fn count_published_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.author_id == author_id && p.status == PostStatus::Published)
            .count() as u64)
    }

    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .count() as u64)
    }

    async fn recent_by_author(&self, author_id: UserId, limit: u32) -> DomainResult<Vec<Post>> {
        let tables = self.inner.lock().unwrap();
        let mut matched: Vec<Post> = tables
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        matched.truncate(limit as usize);
        Ok(matched)
    }

    async fn status_counts(&self) -> DomainResult<PostCounts> {
        let tables = self.inner.lock().unwrap();
        Ok(PostCounts {
            total: tables.posts.len() as u64,
            published: tables
                .posts
                .iter()
                .filter(|p| p.status == PostStatus::Published)
                .count() as u64,
            draft: tables
                .posts
                .iter()
                .filter(|p| p.status == PostStatus::Draft)
                .count() as u64,
        })
    }
}

/* -------------------------------- CommentRepository -------------------------------- */

#[async_trait]
impl CommentRepository for MemoryDb {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.inner.lock().unwrap();
        let id = tables.next_id();
        let created = Comment {
            id: CommentId::new(id)?,
            content: comment.content,
            status: comment.status,
            author_id: comment.author_id,
            post_id: comment.post_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let tables = self.inner.lock().unwrap();
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn set_status(&self, id: CommentId, status: CommentStatus) -> DomainResult<Comment> {
        let mut tables = self.inner.lock().unwrap();
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.status = status;
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut tables = self.inner.lock().unwrap();
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list(
        &self,
        filter: CommentFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<CommentListing>, u64)> {
        let tables = self.inner.lock().unwrap();
        let mut matched: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| filter.post_id.is_none_or(|id| c.post_id == id))
            .filter(|c| filter.status.is_none_or(|status| c.status == status))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        let total = matched.len() as u64;
        let listings = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|comment| comment_listing(&tables, comment))
            .collect();
        Ok((listings, total))
    }

    async fn approved_for_post(&self, post_id: PostId) -> DomainResult<Vec<CommentListing>> {
        let tables = self.inner.lock().unwrap();
        let mut matched: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.status == CommentStatus::Approved)
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(matched
            .into_iter()
            .map(|comment| comment_listing(&tables, comment))
            .collect())
    }

    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let tables = self.inner.lock().unwrap();
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.author_id == author_id)
            .count() as u64)
    }

    async fn status_counts(&self) -> DomainResult<CommentCounts> {
        let tables = self.inner.lock().unwrap();
        Ok(CommentCounts {
            total: tables.comments.len() as u64,
            pending: tables
                .comments
                .iter()
                .filter(|c| c.status == CommentStatus::Pending)
                .count() as u64,
            approved: tables
                .comments
                .iter()
                .filter(|c| c.status == CommentStatus::Approved)
                .count() as u64,
        })
    }
}

fn comment_listing(tables: &Tables, comment: Comment) -> CommentListing {
    let author = tables
        .users
        .iter()
        .find(|u| u.id == comment.author_id)
        .map(AuthorRef::from)
        .expect("comment author must exist");
    let post = tables
        .posts
        .iter()
        .find(|p| p.id == comment.post_id)
        .map(|p| CommentPostRef {
            id: p.id,
            slug: p.slug.clone(),
            title: p.title.clone(),
        })
        .expect("comment post must exist");
    CommentListing {
        comment,
        author,
        post,
    }
}

/* -------------------------------- Ports -------------------------------- */

/// Deterministic clock that only moves when a test advances it.
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Records every invalidated path for assertions.
#[derive(Default)]
pub struct RecordingCache {
    paths: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.paths.lock().unwrap().clear();
    }
}

impl CacheInvalidator for RecordingCache {
    fn invalidate(&self, paths: &[String]) {
        self.paths.lock().unwrap().extend_from_slice(paths);
    }
}

/// Role directory with scripted answers; subjects in `failing` error out on
/// lookup.
#[derive(Default)]
pub struct StaticRoleDirectory {
    roles: Mutex<HashMap<String, Role>>,
    failing: Mutex<HashSet<String>>,
}

impl StaticRoleDirectory {
    pub fn set_role(&self, subject: &str, role: Role) {
        self.roles.lock().unwrap().insert(subject.into(), role);
    }

    pub fn fail_for(&self, subject: &str) {
        self.failing.lock().unwrap().insert(subject.into());
    }
}

#[async_trait]
impl RoleDirectory for StaticRoleDirectory {
    async fn role_of(&self, subject: &str) -> DomainResult<Option<Role>> {
        if self.failing.lock().unwrap().contains(subject) {
            return Err(DomainError::Persistence("directory unavailable".into()));
        }
        Ok(self.roles.lock().unwrap().get(subject).copied())
    }
}
