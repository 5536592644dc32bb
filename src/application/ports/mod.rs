pub mod cache;
pub mod identity;
pub mod time;
pub mod util;
