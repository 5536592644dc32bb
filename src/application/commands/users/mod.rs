mod service;
mod sync;
mod update_profile;

pub(crate) use sync::get_or_create_user;
pub use service::UserCommandService;
pub use update_profile::UpdateProfileCommand;
