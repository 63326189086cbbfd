// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use spacetrail::application::ports::content::ContentClient;
use spacetrail::application::services::ApplicationServices;
use spacetrail::domain::post::{ContentBlock, PostDetail, PostUid, RichTextNode};
use spacetrail::infrastructure::{
    cache::PageCache, session::PreviewCookieCodec, time::SystemClock,
};
use spacetrail::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub const COOKIE_KEY: &[u8; 32] = b"0123456789abcdef0123456789abcdef";

pub fn make_test_router(content: Arc<dyn ContentClient>, page_size: u32) -> Router {
    let services = Arc::new(ApplicationServices::new(content, page_size));
    let state = HttpState {
        services,
        preview_cookies: Arc::new(PreviewCookieCodec::new(*COOKIE_KEY)),
        page_cache: Arc::new(PageCache::new(Arc::new(SystemClock))),
        listing_ttl: Duration::from_secs(2 * 60 * 60),
        post_ttl: Duration::from_secs(30 * 60),
    };
    build_router(state)
}

pub fn cookie_codec() -> PreviewCookieCodec {
    PreviewCookieCodec::new(*COOKIE_KEY)
}

/// A post published on the nth day of March 2024, with enough body text to
/// have a non-zero read time.
pub fn sample_post(n: u32) -> PostDetail {
    PostDetail {
        uid: PostUid::new(format!("post-{n}")).unwrap(),
        first_publication_date: Some(Utc.with_ymd_and_hms(2024, 3, n, 12, 0, 0).unwrap()),
        last_publication_date: Some(Utc.with_ymd_and_hms(2024, 3, n, 15, 0, 0).unwrap()),
        title: format!("Post {n}"),
        subtitle: format!("Subtitle {n}"),
        author: "Jo Writer".into(),
        banner_url: Some(format!("https://cdn.example/banner-{n}.png")),
        content: vec![ContentBlock {
            heading: "Section".into(),
            body: vec![RichTextNode::Paragraph {
                text: vec!["word"; 250].join(" "),
            }],
        }],
    }
}

pub fn sample_posts(count: u32) -> Vec<PostDetail> {
    (1..=count).map(sample_post).collect()
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    get_json_with_headers(app, uri, &[]).await
}

pub async fn get_json_with_headers(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
