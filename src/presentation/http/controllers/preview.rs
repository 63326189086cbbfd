// src/presentation/http/controllers/preview.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub token: String,
    #[serde(rename = "documentId")]
    pub document_id: String,
}

/// Enter preview mode. On success: signed session cookie plus an HTML body
/// that immediately redirects the browser to the resolved document. On a
/// rejected token: 401 and no cookie.
pub async fn enter_preview(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PreviewParams>,
) -> Response {
    match state
        .services
        .preview
        .enter(&params.token, &params.document_id)
        .await
    {
        Ok(entry) => {
            let cookie = state.preview_cookies.issue(&entry.session);
            tracing::info!(target_path = %entry.redirect_path, "preview session established");
            (
                [(header::SET_COOKIE, cookie)],
                Html(redirect_body(&entry.redirect_path)),
            )
                .into_response()
        }
        Err(ApplicationError::Unauthorized(_)) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid token" })),
        )
            .into_response(),
        Err(other) => HttpError::from_error(other).into_response(),
    }
}

/// Leave preview mode: clear the session cookie and send the user home.
/// Idempotent, works just as well when no session exists.
pub async fn exit_preview(Extension(state): Extension<HttpState>) -> Response {
    (
        StatusCode::TEMPORARY_REDIRECT,
        [
            (header::SET_COOKIE, state.preview_cookies.clear()),
            (header::LOCATION, "/".to_owned()),
        ],
    )
        .into_response()
}

fn redirect_body(url: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta http-equiv=\"Refresh\" content=\"0; url={url}\" />\
         <script>window.location.href = '{url}'</script></head></html>"
    )
}
