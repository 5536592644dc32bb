mod categories;
mod service;
mod tags;

pub use categories::{CreateCategoryCommand, UpdateCategoryCommand};
pub use service::TaxonomyCommandService;
