pub mod entity;
pub mod read_time;
pub mod rich_text;

pub use entity::{ContentBlock, PostDetail, PostSummary, PostUid};
pub use read_time::read_time_minutes;
pub use rich_text::RichTextNode;

/// Document type under which posts live in the CMS repository.
pub const POSTS_DOC_TYPE: &str = "posts";
