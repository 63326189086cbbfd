// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::infrastructure::{cache::PageCache, session::PreviewCookieCodec};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub preview_cookies: Arc<PreviewCookieCodec>,
    pub page_cache: Arc<PageCache>,
    /// Revalidation interval for listing pages.
    pub listing_ttl: Duration,
    /// Revalidation interval for post pages.
    pub post_ttl: Duration,
}
