pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{AuthorRef, NewUser, ProfileUpdate, User, UserListing};
pub use repository::UserRepository;
pub use value_objects::{Bio, DisplayName, Email, Role, SubjectId, UserId};
