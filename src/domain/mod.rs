pub mod errors;
pub mod post;
