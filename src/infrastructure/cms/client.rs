// src/infrastructure/cms/client.rs
//! reqwest-backed implementation of the `ContentClient` port. One request
//! per call, no retries; failures map onto the application error taxonomy.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::content::{ContentClient, DocumentPage, PreviewTarget, QueryOptions, SortOrder},
};
use crate::domain::post::PostDetail;
use crate::infrastructure::cms::wire::{QueryResponse, RawDocument, RawPreviewTarget};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

pub struct CmsHttpClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct QueryParams<'a> {
    #[serde(rename = "type")]
    doc_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fetch: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    preview_ref: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RefParam<'a> {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    preview_ref: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct PreviewParams<'a> {
    token: &'a str,
    #[serde(rename = "documentId")]
    document_id: &'a str,
}

fn order_value(order: SortOrder) -> &'static str {
    match order {
        SortOrder::FirstPublicationAsc => "first_publication_date.asc",
        SortOrder::FirstPublicationDesc => "first_publication_date.desc",
    }
}

impl CmsHttpClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str, params: &impl Serialize) -> ApplicationResult<String> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        if query.is_empty() {
            Ok(format!("{}{path}", self.base_url))
        } else {
            Ok(format!("{}{path}?{query}", self.base_url))
        }
    }

    async fn get(&self, url: &str) -> ApplicationResult<reqwest::Response> {
        self.http.get(url).send().await.map_err(|err| {
            tracing::warn!(error = %err, url, "cms request failed");
            ApplicationError::upstream(err.to_string())
        })
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> ApplicationResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApplicationError::upstream(format!(
            "cms responded with {status}"
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApplicationError::malformed(err.to_string()))
}

#[async_trait]
impl ContentClient for CmsHttpClient {
    async fn query_by_type(
        &self,
        doc_type: &str,
        options: QueryOptions,
    ) -> ApplicationResult<DocumentPage> {
        let fetch = if options.fetch.is_empty() {
            None
        } else {
            Some(options.fetch.join(","))
        };
        let params = QueryParams {
            doc_type,
            page_size: options.page_size,
            cursor: options.cursor.as_deref(),
            order: options.order.map(order_value),
            after: options.after.as_deref(),
            fetch,
            preview_ref: options.preview_ref.as_deref(),
        };
        let url = self.endpoint("/documents", &params)?;

        let response = self.get(&url).await?;
        let body: QueryResponse = read_json(response).await?;

        let results = body
            .results
            .into_iter()
            .filter_map(RawDocument::into_summary)
            .collect();
        Ok(DocumentPage {
            results,
            next_cursor: body.next_cursor,
        })
    }

    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> ApplicationResult<Option<PostDetail>> {
        let url = self.endpoint(
            &format!("/documents/{doc_type}/{uid}"),
            &RefParam { preview_ref },
        )?;

        let response = self.get(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: RawDocument = read_json(response).await?;
        Ok(body.into_detail(uid))
    }

    async fn resolve_preview(
        &self,
        token: &str,
        document_id: &str,
    ) -> ApplicationResult<Option<PreviewTarget>> {
        let url = self.endpoint(
            "/previews/resolve",
            &PreviewParams { token, document_id },
        )?;

        let response = self.get(&url).await?;
        // The CMS signals a rejected or expired token with 401/404. Both mean
        // "no session", not an upstream failure.
        if matches!(
            response.status(),
            StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED
        ) {
            return Ok(None);
        }

        let body: RawPreviewTarget = read_json(response).await?;
        Ok(Some(PreviewTarget {
            doc_type: body.doc_type,
            uid: body.uid,
        }))
    }
}
