pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentListing, CommentPostRef, NewComment};
pub use repository::{CommentCounts, CommentFilter, CommentRepository};
pub use value_objects::{CommentBody, CommentId, CommentStatus};
