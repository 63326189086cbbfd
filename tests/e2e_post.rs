// tests/e2e_post.rs
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use spacetrail::domain::post::{ContentBlock, PostDetail, PostUid, RichTextNode};

mod support;

use support::helpers::{
    cookie_codec, get_json, get_json_with_headers, make_test_router, sample_post, sample_posts,
};
use support::mocks::InMemoryContentClient;

#[tokio::test]
async fn resolves_post_with_read_time_and_neighbours() {
    let content = Arc::new(InMemoryContentClient::new(sample_posts(3)));
    let app = make_test_router(content, 5);

    let (status, body) = get_json(&app, "/post/post-2").await;
    assert_eq!(status, 200);

    assert_eq!(body["post"]["uid"], "post-2");
    assert_eq!(body["post"]["title"], "Post 2");
    // 251 words (one-word heading + 250-word paragraph) at 200 wpm round up to 2.
    assert_eq!(body["post"]["read_time_minutes"], 2);
    assert_eq!(
        body["post"]["banner_url"],
        "https://cdn.example/banner-2.png"
    );
    assert!(
        body["post"]["content"][0]["body_html"]
            .as_str()
            .unwrap()
            .starts_with("<p>")
    );

    // post-1 is older, post-3 newer under first-publication ordering.
    assert_eq!(body["prev_post"]["uid"], "post-1");
    assert_eq!(body["next_post"]["uid"], "post-3");
    assert!(body["prev_post"]["title"].is_string());
}

#[tokio::test]
async fn oldest_post_has_no_previous_neighbour() {
    let content = Arc::new(InMemoryContentClient::new(sample_posts(3)));
    let app = make_test_router(content, 5);

    let (status, body) = get_json(&app, "/post/post-1").await;
    assert_eq!(status, 200);
    assert!(body["prev_post"].is_null());
    assert_eq!(body["next_post"]["uid"], "post-2");
}

#[tokio::test]
async fn newest_post_has_no_next_neighbour() {
    let content = Arc::new(InMemoryContentClient::new(sample_posts(3)));
    let app = make_test_router(content, 5);

    let (status, body) = get_json(&app, "/post/post-3").await;
    assert_eq!(status, 200);
    assert_eq!(body["prev_post"]["uid"], "post-2");
    assert!(body["next_post"].is_null());
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let content = Arc::new(InMemoryContentClient::new(sample_posts(2)));
    let app = make_test_router(content, 5);

    let (status, body) = get_json(&app, "/post/never-written").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn post_without_content_reads_as_zero_minutes() {
    let empty = PostDetail {
        uid: PostUid::new("empty-post").unwrap(),
        first_publication_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        last_publication_date: None,
        title: "Empty".into(),
        subtitle: String::new(),
        author: "Jo Writer".into(),
        banner_url: None,
        content: vec![],
    };
    let content = Arc::new(InMemoryContentClient::new(vec![empty]));
    let app = make_test_router(content, 5);

    let (status, body) = get_json(&app, "/post/empty-post").await;
    assert_eq!(status, 200);
    assert_eq!(body["post"]["read_time_minutes"], 0);
    assert_eq!(body["post"]["content"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn draft_is_visible_only_with_a_preview_session() {
    let draft = PostDetail {
        uid: PostUid::new("upcoming").unwrap(),
        first_publication_date: None,
        last_publication_date: None,
        title: "Upcoming".into(),
        subtitle: "Not yet out".into(),
        author: "Jo Writer".into(),
        banner_url: None,
        content: vec![ContentBlock {
            heading: "Draft".into(),
            body: vec![RichTextNode::Paragraph {
                text: "unpublished words".into(),
            }],
        }],
    };
    let content = Arc::new(
        InMemoryContentClient::new(sample_posts(1)).with_draft("draft-ref-123", draft),
    );
    let app = make_test_router(content, 5);

    let (status, _) = get_json(&app, "/post/upcoming").await;
    assert_eq!(status, 404);

    let cookie = cookie_codec().issue(&spacetrail::application::dto::PreviewSession::new(
        "draft-ref-123",
    ));
    let cookie_pair = cookie.split(';').next().unwrap().to_owned();
    let (status, body) =
        get_json_with_headers(&app, "/post/upcoming", &[("cookie", &cookie_pair)]).await;
    assert_eq!(status, 200);
    assert_eq!(body["post"]["uid"], "upcoming");
    assert_eq!(body["post"]["title"], "Upcoming");
}

#[tokio::test]
async fn preview_session_bypasses_the_page_cache() {
    let mut revision = sample_post(2);
    revision.title = "Post 2 (edited)".into();
    let content =
        Arc::new(InMemoryContentClient::new(sample_posts(3)).with_draft("rev-ref-42", revision));
    let app = make_test_router(content, 5);

    // Prime the cache with the published revision.
    let (status, body) = get_json(&app, "/post/post-2").await;
    assert_eq!(status, 200);
    assert_eq!(body["post"]["title"], "Post 2");

    // An active session must see the draft edit, not the cached snapshot.
    let cookie = cookie_codec().issue(&spacetrail::application::dto::PreviewSession::new(
        "rev-ref-42",
    ));
    let cookie_pair = cookie.split(';').next().unwrap().to_owned();
    let (status, body) =
        get_json_with_headers(&app, "/post/post-2", &[("cookie", &cookie_pair)]).await;
    assert_eq!(status, 200);
    assert_eq!(body["post"]["title"], "Post 2 (edited)");

    // And the draft payload is never written back for published readers.
    let (status, body) = get_json(&app, "/post/post-2").await;
    assert_eq!(status, 200);
    assert_eq!(body["post"]["title"], "Post 2");
}
