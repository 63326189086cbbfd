// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::rich_text::RichTextNode;
use chrono::{DateTime, Utc};
use std::fmt;

/// Unique identifier of a document as minted by the CMS. Doubles as the
/// URL slug of the post page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostUid(String);

impl PostUid {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("post uid cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostUid> for String {
    fn from(value: PostUid) -> Self {
        value.0
    }
}

/// Listing-level view of a post. Immutable once fetched; identity is the uid.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub uid: PostUid,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One section of a post body: a heading followed by rich-text nodes.
/// Node order is meaningful and must survive every transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<RichTextNode>,
}

/// Full document behind a post page. `content` keeps the CMS block order.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub uid: PostUid,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub last_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: Option<String>,
    pub content: Vec<ContentBlock>,
}

impl PostDetail {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            uid: self.uid.clone(),
            first_publication_date: self.first_publication_date,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_rejects_empty_input() {
        assert!(PostUid::new("").is_err());
        assert!(PostUid::new("   ").is_err());
    }

    #[test]
    fn uid_round_trips() {
        let uid = PostUid::new("how-to-rust").unwrap();
        assert_eq!(uid.as_str(), "how-to-rust");
        assert_eq!(String::from(uid), "how-to-rust");
    }
}
