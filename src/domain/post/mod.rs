pub mod content;
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use content::PostContent;
pub use entity::{NewPost, Post, PostListing, PostUpdate, PublishStateUpdate};
pub use repository::{CommentScope, PostCounts, PostFilter, PostOrder, PostRepository};
pub use specifications::CanModifyPostSpec;
pub use value_objects::{CoverImage, Excerpt, PostId, PostStatus, PostTitle};
