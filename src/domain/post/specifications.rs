use crate::domain::post::entity::Post;
use crate::domain::user::{Role, UserId};

/// Ownership predicate shared by post update and delete: Admin bypasses,
/// an Author must own the post.
pub struct CanModifyPostSpec<'a> {
    role: Role,
    user_id: UserId,
    post: &'a Post,
}

impl<'a> CanModifyPostSpec<'a> {
    pub fn new(role: Role, user_id: UserId, post: &'a Post) -> Self {
        Self {
            role,
            user_id,
            post,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.role == Role::Admin || self.post.author_id == self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryId;
    use crate::domain::post::content::PostContent;
    use crate::domain::post::value_objects::{PostId, PostStatus, PostTitle};
    use crate::domain::slug::Slug;
    use chrono::Utc;
    use serde_json::json;

    fn post_owned_by(author: i64) -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("t").unwrap(),
            slug: Slug::new("t").unwrap(),
            content: PostContent::new(json!({})),
            excerpt: None,
            cover_image: None,
            status: PostStatus::Draft,
            published_at: None,
            author_id: UserId::new(author).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn owner_may_modify() {
        let post = post_owned_by(7);
        let spec = CanModifyPostSpec::new(Role::Author, UserId::new(7).unwrap(), &post);
        assert!(spec.is_satisfied());
    }

    #[test]
    fn non_owner_author_may_not() {
        let post = post_owned_by(7);
        let spec = CanModifyPostSpec::new(Role::Author, UserId::new(8).unwrap(), &post);
        assert!(!spec.is_satisfied());
    }

    #[test]
    fn admin_bypasses_ownership() {
        let post = post_owned_by(7);
        let spec = CanModifyPostSpec::new(Role::Admin, UserId::new(8).unwrap(), &post);
        assert!(spec.is_satisfied());
    }
}
