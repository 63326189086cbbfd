pub mod cache;
pub mod cms;
pub mod session;
pub mod time;
