mod admin;
mod author;
mod by_id;
mod by_slug;
mod published;
mod search;
mod service;

pub use published::PublishedPostFilter;
pub use service::PostQueryService;
