mod create;
mod delete;
mod service;
mod update;

pub use create::CreatePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
