// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    cms_base_url: String,
    listen_addr: String,
    preview_cookie_key: String,
    page_size: u32,
    listing_revalidate: Duration,
    post_revalidate: Duration,
    cms_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_page_size() -> u32 {
    5
}

// Reference revalidation behaviour: listing every 2 hours, posts every 30 minutes.
fn default_listing_revalidate_secs() -> u64 {
    2 * 60 * 60
}

fn default_post_revalidate_secs() -> u64 {
    30 * 60
}

fn default_cms_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let cms_base_url =
            env::var("CMS_BASE_URL").map_err(|_| ConfigError::Missing("CMS_BASE_URL"))?;
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let preview_cookie_key = env::var("PREVIEW_COOKIE_KEY")
            .map_err(|_| ConfigError::Missing("PREVIEW_COOKIE_KEY"))?;
        if preview_cookie_key.len() < 32 {
            return Err(ConfigError::Invalid(
                "PREVIEW_COOKIE_KEY must be at least 32 bytes".into(),
            ));
        }

        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_else(default_page_size);
        if page_size == 0 {
            return Err(ConfigError::Invalid("PAGE_SIZE must be positive".into()));
        }

        let listing_revalidate_secs = env::var("LISTING_REVALIDATE_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_listing_revalidate_secs);

        let post_revalidate_secs = env::var("POST_REVALIDATE_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_post_revalidate_secs);

        let cms_timeout_secs = env::var("CMS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_cms_timeout_secs);

        Ok(Self {
            cms_base_url,
            listen_addr,
            preview_cookie_key,
            page_size,
            listing_revalidate: Duration::from_secs(listing_revalidate_secs),
            post_revalidate: Duration::from_secs(post_revalidate_secs),
            cms_timeout: Duration::from_secs(cms_timeout_secs),
        })
    }

    pub fn cms_base_url(&self) -> &str {
        &self.cms_base_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn preview_cookie_key(&self) -> &[u8] {
        self.preview_cookie_key.as_bytes()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn listing_revalidate(&self) -> Duration {
        self.listing_revalidate
    }

    pub fn post_revalidate(&self) -> Duration {
        self.post_revalidate
    }

    pub fn cms_timeout(&self) -> Duration {
        self.cms_timeout
    }
}
