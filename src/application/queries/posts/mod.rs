mod list;
mod resolve;
mod service;

pub use list::ListPostsQuery;
pub use resolve::ResolvePostQuery;
pub use service::PostQueryService;
