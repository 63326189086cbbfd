// src/application/ports/content.rs
use crate::application::error::ApplicationResult;
use crate::domain::post::{PostDetail, PostSummary};
use async_trait::async_trait;

/// Ordering applied by the CMS when answering a query. Only the
/// first-publication axis is needed for neighbour navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    FirstPublicationAsc,
    FirstPublicationDesc,
}

#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub page_size: Option<u32>,
    /// Opaque continuation cursor minted by the CMS; passed through verbatim.
    pub cursor: Option<String>,
    pub order: Option<SortOrder>,
    /// Restrict results to documents strictly after this uid under the
    /// requested ordering. The adjacency semantics belong to the CMS.
    pub after: Option<String>,
    /// Field projection, e.g. `["posts.title", "posts.uid"]`.
    pub fetch: Vec<String>,
    /// Preview ref to read unpublished edits; absent means published state.
    pub preview_ref: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DocumentPage {
    pub results: Vec<PostSummary>,
    pub next_cursor: Option<String>,
}

/// Target a preview token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub doc_type: String,
    pub uid: String,
}

/// The content-management service, seen as an opaque HTTP data source.
/// Calls are not retried; a single failure surfaces as an error outcome.
#[async_trait]
pub trait ContentClient: Send + Sync {
    async fn query_by_type(
        &self,
        doc_type: &str,
        options: QueryOptions,
    ) -> ApplicationResult<DocumentPage>;

    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> ApplicationResult<Option<PostDetail>>;

    /// Redeem a (token, document id) pair. `None` means the CMS rejected the
    /// token (invalid or expired).
    async fn resolve_preview(
        &self,
        token: &str,
        document_id: &str,
    ) -> ApplicationResult<Option<PreviewTarget>>;
}
