mod service;
mod stats;
mod user_detail;

pub use service::AdminQueryService;
