// src/application/preview/mod.rs
//! Preview session lifecycle: redeem a CMS token to enter, clear to exit.

use std::sync::Arc;

use crate::application::{
    dto::PreviewSession,
    error::{ApplicationError, ApplicationResult},
    ports::{ContentClientPort, content::PreviewTarget},
};
use crate::domain::post::POSTS_DOC_TYPE;

/// Where the user lands after leaving preview mode, and the fallback for
/// documents the front end has no page for.
pub const ROOT_PATH: &str = "/";

pub struct PreviewService {
    content: Arc<ContentClientPort>,
}

/// Outcome of a successful `enter`: the session to establish and where the
/// client should be sent.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub session: PreviewSession,
    pub redirect_path: String,
}

impl PreviewService {
    pub fn new(content: Arc<ContentClientPort>) -> Self {
        Self { content }
    }

    /// Redeem `(token, document_id)` against the CMS. Rejection means
    /// Unauthorized and no session comes into existence. On success the
    /// session carries the token as its opaque ref.
    pub async fn enter(&self, token: &str, document_id: &str) -> ApplicationResult<PreviewEntry> {
        let target = self
            .content
            .resolve_preview(token, document_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("Invalid token"))?;

        Ok(PreviewEntry {
            session: PreviewSession::new(token),
            redirect_path: resolve_link(&target),
        })
    }
}

/// Map a resolved document to the path that renders it. Unrecognised types
/// fall back to the root path.
pub fn resolve_link(target: &PreviewTarget) -> String {
    if target.doc_type == POSTS_DOC_TYPE {
        format!("/post/{}", target.uid)
    } else {
        ROOT_PATH.to_owned()
    }
}
