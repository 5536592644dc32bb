// tests/support/mod.rs
#[allow(dead_code, unused_imports)]
pub mod helpers;
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
