mod categories;
mod service;
mod tags;

pub use service::TaxonomyQueryService;
