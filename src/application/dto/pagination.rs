// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};

/// One page of results plus the opaque continuation cursor the CMS minted
/// for the page after it. The cursor is carried through unchanged and never
/// interpreted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorPage<T> {
    pub results: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    pub fn new(results: Vec<T>, next_cursor: Option<String>) -> Self {
        let has_more = next_cursor.is_some();
        Self {
            results,
            next_cursor,
            has_more,
        }
    }

    /// Append a freshly fetched page. Results keep arrival order, no
    /// deduplication; the cursor is replaced by the new page's cursor.
    pub fn append(&mut self, next: CursorPage<T>) {
        self.results.extend(next.results);
        self.next_cursor = next.next_cursor;
        self.has_more = self.next_cursor.is_some();
    }
}
