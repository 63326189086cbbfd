pub mod pagination;
pub mod posts;
pub mod preview;

pub use pagination::CursorPage;
pub use posts::{ContentBlockDto, PostDetailDto, PostLinkDto, PostSummaryDto, ResolvedPostDto};
pub use preview::PreviewSession;
