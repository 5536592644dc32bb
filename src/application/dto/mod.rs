pub mod admin;
pub mod categories;
pub mod comments;
pub mod pagination;
pub mod posts;
pub mod tags;
pub mod users;

pub use admin::{DashboardStatsDto, RecentPostDto, UserDetailDto};
pub use categories::{CategoryDto, CategoryListingDto};
pub use comments::{CommentDto, CommentPostRefDto};
pub use pagination::{Page, PageInfo, PageRequest};
pub use posts::{PostDetailDto, PostDto};
pub use tags::{TagDto, TagListingDto};
pub use users::{AuthorProfileDto, AuthorRefDto, UserDto, UserListingDto};
