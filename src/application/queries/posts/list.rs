// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::application::{
    dto::{CursorPage, PostSummaryDto},
    error::ApplicationResult,
    ports::content::QueryOptions,
};
use crate::domain::post::POSTS_DOC_TYPE;

pub struct ListPostsQuery {
    pub cursor: Option<String>,
    /// Forwarded opaquely so an active preview sees unpublished edits.
    pub preview_ref: Option<String>,
}

impl PostQueryService {
    /// Fetch one listing page, preserving CMS result order. The cursor is a
    /// pass-through continuation token; absent cursor means the first page.
    pub async fn fetch_page(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<CursorPage<PostSummaryDto>> {
        let page = self
            .content
            .query_by_type(
                POSTS_DOC_TYPE,
                QueryOptions {
                    page_size: Some(self.page_size),
                    cursor: query.cursor,
                    preview_ref: query.preview_ref,
                    ..QueryOptions::default()
                },
            )
            .await?;

        let results = page.results.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(results, page.next_cursor))
    }

    /// Extend `current` with the page behind its own cursor. A missing
    /// cursor is a silent no-op. Appended results keep arrival order and are
    /// not deduplicated; the cursor is replaced by the new one.
    pub async fn load_more(
        &self,
        current: &mut CursorPage<PostSummaryDto>,
        preview_ref: Option<String>,
    ) -> ApplicationResult<bool> {
        let Some(cursor) = current.next_cursor.clone() else {
            return Ok(false);
        };

        let next = self
            .fetch_page(ListPostsQuery {
                cursor: Some(cursor),
                preview_ref,
            })
            .await?;
        current.append(next);
        Ok(true)
    }
}
