// src/application/dto/posts.rs
use crate::domain::post::{PostDetail, PostSummary, read_time_minutes, rich_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryDto {
    pub uid: String,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

impl From<PostSummary> for PostSummaryDto {
    fn from(summary: PostSummary) -> Self {
        Self {
            uid: summary.uid.into(),
            first_publication_date: summary.first_publication_date,
            title: summary.title,
            subtitle: summary.subtitle,
            author: summary.author,
        }
    }
}

/// Just enough for a previous/next navigation link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLinkDto {
    pub uid: String,
    pub title: String,
}

impl From<PostSummary> for PostLinkDto {
    fn from(summary: PostSummary) -> Self {
        Self {
            uid: summary.uid.into(),
            title: summary.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlockDto {
    pub heading: String,
    pub body_html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailDto {
    pub uid: String,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub last_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: Option<String>,
    pub content: Vec<ContentBlockDto>,
    /// Derived from content on every render, never persisted.
    pub read_time_minutes: u32,
}

impl From<PostDetail> for PostDetailDto {
    fn from(detail: PostDetail) -> Self {
        let read_time = read_time_minutes(&detail.content);
        let content = detail
            .content
            .iter()
            .map(|block| ContentBlockDto {
                heading: block.heading.clone(),
                body_html: rich_text::body_to_html(&block.body),
            })
            .collect();

        Self {
            uid: detail.uid.into(),
            first_publication_date: detail.first_publication_date,
            last_publication_date: detail.last_publication_date,
            title: detail.title,
            subtitle: detail.subtitle,
            author: detail.author,
            banner_url: detail.banner_url,
            content,
            read_time_minutes: read_time,
        }
    }
}

/// Post page payload: the document plus its chronological neighbours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPostDto {
    pub post: PostDetailDto,
    pub prev_post: Option<PostLinkDto>,
    pub next_post: Option<PostLinkDto>,
}
