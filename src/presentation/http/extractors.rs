// src/presentation/http/extractors.rs
use crate::{
    application::{dto::PreviewSession, error::ApplicationError},
    infrastructure::session::PREVIEW_COOKIE,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::HeaderMapExt;

use super::error::HttpError;

/// Preview session carried by the request, if any. A missing, tampered or
/// badly signed cookie all read as "no preview".
#[derive(Debug, Clone)]
pub struct ActivePreview(pub Option<PreviewSession>);

impl FromRequestParts<()> for ActivePreview {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let session = parts
            .headers
            .typed_get::<headers::Cookie>()
            .and_then(|cookies| cookies.get(PREVIEW_COOKIE).map(str::to_owned))
            .and_then(|value| app_state.preview_cookies.decode(&value));

        Ok(Self(session))
    }
}
