// tests/support/mocks.rs
use async_trait::async_trait;
use spacetrail::application::error::{ApplicationError, ApplicationResult};
use spacetrail::application::ports::content::{
    ContentClient, DocumentPage, PreviewTarget, QueryOptions, SortOrder,
};
use spacetrail::domain::post::{PostDetail, PostSummary};
use std::collections::HashMap;

/// In-memory stand-in for the CMS. Published documents are held in insertion
/// order (the mock's "default ordering"); drafts are only visible when the
/// query carries their preview ref. Continuation cursors are minted as
/// `offset:N` tokens the pipeline must treat as opaque.
pub struct InMemoryContentClient {
    published: Vec<PostDetail>,
    drafts: HashMap<String, Draft>,
    previews: HashMap<(String, String), PreviewTarget>,
}

struct Draft {
    required_ref: String,
    detail: PostDetail,
}

impl InMemoryContentClient {
    pub fn new(published: Vec<PostDetail>) -> Self {
        Self {
            published,
            drafts: HashMap::new(),
            previews: HashMap::new(),
        }
    }

    pub fn with_draft(mut self, required_ref: impl Into<String>, detail: PostDetail) -> Self {
        self.drafts.insert(
            detail.uid.as_str().to_owned(),
            Draft {
                required_ref: required_ref.into(),
                detail,
            },
        );
        self
    }

    pub fn with_preview_token(
        mut self,
        token: impl Into<String>,
        document_id: impl Into<String>,
        target: PreviewTarget,
    ) -> Self {
        self.previews
            .insert((token.into(), document_id.into()), target);
        self
    }

    fn mint_cursor(offset: usize) -> String {
        format!("offset:{offset}")
    }

    fn parse_cursor(cursor: &str) -> ApplicationResult<usize> {
        cursor
            .strip_prefix("offset:")
            .and_then(|raw| raw.parse::<usize>().ok())
            .ok_or_else(|| ApplicationError::upstream(format!("unknown cursor {cursor}")))
    }

    fn ordered(&self, order: Option<SortOrder>) -> Vec<&PostDetail> {
        let mut docs: Vec<&PostDetail> = self.published.iter().collect();
        match order {
            None => {}
            Some(SortOrder::FirstPublicationAsc) => {
                docs.sort_by_key(|d| d.first_publication_date);
            }
            Some(SortOrder::FirstPublicationDesc) => {
                docs.sort_by_key(|d| d.first_publication_date);
                docs.reverse();
            }
        }
        docs
    }
}

#[async_trait]
impl ContentClient for InMemoryContentClient {
    async fn query_by_type(
        &self,
        doc_type: &str,
        options: QueryOptions,
    ) -> ApplicationResult<DocumentPage> {
        if doc_type != "posts" {
            return Ok(DocumentPage {
                results: vec![],
                next_cursor: None,
            });
        }

        let docs = self.ordered(options.order);

        // `after` narrows to documents strictly past the uid in the current
        // ordering, which is how neighbour queries are phrased.
        let start = match (&options.after, &options.cursor) {
            (Some(after), _) => docs
                .iter()
                .position(|d| d.uid.as_str() == after)
                .map_or(docs.len(), |idx| idx + 1),
            (None, Some(cursor)) => Self::parse_cursor(cursor)?,
            (None, None) => 0,
        };

        let page_size = options.page_size.map_or(docs.len(), |n| n as usize);
        let end = (start + page_size).min(docs.len());

        let results: Vec<PostSummary> = docs[start.min(docs.len())..end]
            .iter()
            .map(|d| d.summary())
            .collect();
        let next_cursor =
            (options.after.is_none() && end < docs.len()).then(|| Self::mint_cursor(end));

        Ok(DocumentPage {
            results,
            next_cursor,
        })
    }

    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> ApplicationResult<Option<PostDetail>> {
        if doc_type != "posts" {
            return Ok(None);
        }

        // A matching ref sees the draft revision even when a published
        // version of the same uid exists.
        if let (Some(draft), Some(given)) = (self.drafts.get(uid), preview_ref) {
            if draft.required_ref == given {
                return Ok(Some(draft.detail.clone()));
            }
        }

        if let Some(found) = self.published.iter().find(|d| d.uid.as_str() == uid) {
            return Ok(Some(found.clone()));
        }

        Ok(None)
    }

    async fn resolve_preview(
        &self,
        token: &str,
        document_id: &str,
    ) -> ApplicationResult<Option<PreviewTarget>> {
        Ok(self
            .previews
            .get(&(token.to_owned(), document_id.to_owned()))
            .cloned())
    }
}
