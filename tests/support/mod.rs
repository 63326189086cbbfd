// tests/support/mod.rs
pub mod helpers;
pub mod mocks;
