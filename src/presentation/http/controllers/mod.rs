pub mod posts;
pub mod preview;
