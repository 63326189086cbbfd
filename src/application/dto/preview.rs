// src/application/dto/preview.rs
use serde::{Deserialize, Serialize};

/// Scoped preview session established by redeeming a CMS preview token.
/// The ref is opaque: it is forwarded to content fetches verbatim and never
/// interpreted here. Held client-side in a signed cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSession {
    #[serde(rename = "ref")]
    pub preview_ref: String,
}

impl PreviewSession {
    pub fn new(preview_ref: impl Into<String>) -> Self {
        Self {
            preview_ref: preview_ref.into(),
        }
    }
}
