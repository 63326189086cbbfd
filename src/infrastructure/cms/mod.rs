pub mod client;
pub mod wire;

pub use client::CmsHttpClient;
