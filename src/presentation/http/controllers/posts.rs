// src/presentation/http/controllers/posts.rs
use crate::application::error::ApplicationError;
use crate::application::queries::posts::{ListPostsQuery, ResolvePostQuery};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ActivePreview;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Listing feed. Without a cursor this is the first page; with one it is the
/// "load more" continuation. The caller appends continuation results to what
/// it already holds and must not issue a new request while one is in flight.
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    preview: ActivePreview,
    Query(params): Query<ListingParams>,
) -> HttpResult<Json<serde_json::Value>> {
    let preview_ref = preview.0.map(|session| session.preview_ref);
    let cache_key = format!("posts?cursor={}", params.cursor.as_deref().unwrap_or(""));

    // Previews must see unpublished edits, never a revalidated snapshot.
    if preview_ref.is_none() {
        if let Some(hit) = state.page_cache.get(&cache_key) {
            return Ok(Json(hit));
        }
    }

    let page = state
        .services
        .post_queries
        .fetch_page(ListPostsQuery {
            cursor: params.cursor,
            preview_ref: preview_ref.clone(),
        })
        .await
        .into_http()?;

    let payload = serde_json::to_value(&page)
        .map_err(|err| HttpError::from_error(ApplicationError::infrastructure(err.to_string())))?;

    if preview_ref.is_none() {
        state
            .page_cache
            .put(cache_key, payload.clone(), state.listing_ttl);
    }

    Ok(Json(payload))
}

/// Post page payload: document, read time and prev/next links. Slugs unknown
/// to the cache are resolved on first request.
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    preview: ActivePreview,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    let preview_ref = preview.0.map(|session| session.preview_ref);
    let cache_key = format!("post/{slug}");

    if preview_ref.is_none() {
        if let Some(hit) = state.page_cache.get(&cache_key) {
            return Ok(Json(hit));
        }
    }

    let resolved = state
        .services
        .post_queries
        .resolve_post(ResolvePostQuery {
            slug,
            preview_ref: preview_ref.clone(),
        })
        .await
        .into_http()?;

    let payload = serde_json::to_value(&resolved)
        .map_err(|err| HttpError::from_error(ApplicationError::infrastructure(err.to_string())))?;

    if preview_ref.is_none() {
        state
            .page_cache
            .put(cache_key, payload.clone(), state.post_ttl);
    }

    Ok(Json(payload))
}
