// src/infrastructure/cms/wire.rs
//! JSON shapes of the CMS API. Deserialization is deliberately lenient:
//! absent fields become empty values so a malformed document degrades to an
//! empty rendering instead of failing the page.

use crate::domain::post::{ContentBlock, PostDetail, PostSummary, PostUid, RichTextNode};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<RawDocument>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub first_publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: RawData,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Vec<RawContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct RawBanner {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawContentBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RawRichTextNode>,
}

/// Flat node shape; `kind` selects the variant. Unknown kinds are dropped in
/// conversion rather than failing the document.
#[derive(Debug, Deserialize)]
pub struct RawRichTextNode {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawPreviewTarget {
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub uid: String,
}

impl RawRichTextNode {
    fn into_node(self) -> Option<RichTextNode> {
        match self.kind.as_str() {
            "paragraph" => Some(RichTextNode::Paragraph { text: self.text }),
            "heading" => Some(RichTextNode::Heading {
                level: self.level.unwrap_or(1),
                text: self.text,
            }),
            "list-item" => Some(RichTextNode::ListItem { text: self.text }),
            "image" => Some(RichTextNode::Image {
                url: self.url.unwrap_or_default(),
                alt: self.alt,
            }),
            "hyperlink" => Some(RichTextNode::Link {
                url: self.url.unwrap_or_default(),
                text: self.text,
            }),
            other => {
                tracing::debug!(kind = other, "skipping unknown rich-text node");
                None
            }
        }
    }
}

impl RawDocument {
    /// Listing mapping. Documents without a uid cannot be linked to, so they
    /// yield `None` and are dropped from the page.
    pub fn into_summary(self) -> Option<PostSummary> {
        let uid = PostUid::new(self.uid?).ok()?;
        Some(PostSummary {
            uid,
            first_publication_date: self.first_publication_date,
            title: self.data.title,
            subtitle: self.data.subtitle,
            author: self.data.author,
        })
    }

    /// Detail mapping for a document fetched by uid. The requested uid backs
    /// the identity when the payload omits it.
    pub fn into_detail(self, requested_uid: &str) -> Option<PostDetail> {
        let uid = PostUid::new(self.uid.unwrap_or_else(|| requested_uid.to_owned())).ok()?;
        let content = self
            .data
            .content
            .into_iter()
            .map(|block| ContentBlock {
                heading: block.heading,
                body: block.body.into_iter().filter_map(|n| n.into_node()).collect(),
            })
            .collect();

        Some(PostDetail {
            uid,
            first_publication_date: self.first_publication_date,
            last_publication_date: self.last_publication_date,
            title: self.data.title,
            subtitle: self.data.subtitle,
            author: self.data.author,
            banner_url: self.data.banner.and_then(|banner| banner.url),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_empty() {
        let doc: RawDocument =
            serde_json::from_value(json!({ "uid": "bare-post", "type": "posts" })).unwrap();
        let detail = doc.into_detail("bare-post").unwrap();

        assert_eq!(detail.uid.as_str(), "bare-post");
        assert_eq!(detail.title, "");
        assert!(detail.content.is_empty());
        assert!(detail.banner_url.is_none());
    }

    #[test]
    fn unknown_node_kinds_are_dropped_in_order() {
        let doc: RawDocument = serde_json::from_value(json!({
            "uid": "p",
            "type": "posts",
            "data": {
                "content": [{
                    "heading": "h",
                    "body": [
                        { "type": "paragraph", "text": "kept" },
                        { "type": "embed", "url": "https://example.org" },
                        { "type": "list-item", "text": "also kept" }
                    ]
                }]
            }
        }))
        .unwrap();

        let detail = doc.into_detail("p").unwrap();
        assert_eq!(
            detail.content[0].body,
            vec![
                RichTextNode::Paragraph { text: "kept".into() },
                RichTextNode::ListItem {
                    text: "also kept".into()
                },
            ]
        );
    }

    #[test]
    fn summary_without_uid_is_dropped() {
        let doc: RawDocument = serde_json::from_value(json!({ "type": "posts" })).unwrap();
        assert!(doc.into_summary().is_none());
    }
}
