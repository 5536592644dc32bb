mod create;
mod moderate;
mod service;

pub use create::CreateCommentCommand;
pub use service::CommentCommandService;
