// src/application/queries/posts/resolve.rs
use super::PostQueryService;
use crate::application::{
    dto::{PostDetailDto, PostLinkDto, ResolvedPostDto},
    error::{ApplicationError, ApplicationResult},
    ports::content::{QueryOptions, SortOrder},
};
use crate::domain::post::{POSTS_DOC_TYPE, PostSummary, PostUid};

pub struct ResolvePostQuery {
    pub slug: String,
    pub preview_ref: Option<String>,
}

impl PostQueryService {
    /// Resolve one post by slug, together with its chronological neighbours
    /// under first-publication-date ordering. Missing neighbours are normal
    /// (oldest and newest posts have only one each).
    pub async fn resolve_post(&self, query: ResolvePostQuery) -> ApplicationResult<ResolvedPostDto> {
        let uid = PostUid::new(query.slug)?;
        let preview_ref = query.preview_ref;

        let detail = self
            .content
            .get_by_uid(POSTS_DOC_TYPE, uid.as_str(), preview_ref.as_deref())
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no post with slug {uid}")))?;

        // Adjacency under each ordering is answered by the CMS, not computed
        // locally. Independent reads, so they can run concurrently.
        let (prev_page, next_page) = tokio::join!(
            self.neighbour_of(&uid, SortOrder::FirstPublicationDesc, preview_ref.clone()),
            self.neighbour_of(&uid, SortOrder::FirstPublicationAsc, preview_ref.clone()),
        );

        let prev_post = prev_page?.map(PostLinkDto::from);
        let next_post = next_page?.map(PostLinkDto::from);

        Ok(ResolvedPostDto {
            post: PostDetailDto::from(detail),
            prev_post,
            next_post,
        })
    }

    async fn neighbour_of(
        &self,
        uid: &PostUid,
        order: SortOrder,
        preview_ref: Option<String>,
    ) -> ApplicationResult<Option<PostSummary>> {
        let page = self
            .content
            .query_by_type(
                POSTS_DOC_TYPE,
                QueryOptions {
                    page_size: Some(1),
                    order: Some(order),
                    after: Some(uid.as_str().to_owned()),
                    fetch: vec!["posts.title".into(), "posts.uid".into()],
                    preview_ref,
                    ..QueryOptions::default()
                },
            )
            .await?;

        Ok(page.results.into_iter().next())
    }
}
