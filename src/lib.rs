//! Blog front end for a headless CMS.
//!
//! Fetches posts over HTTP from a content-management service, serves a
//! cursor-paginated listing feed, post pages with rich-text content,
//! read-time estimation and previous/next navigation, and a cookie-scoped
//! preview mode for unpublished content.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
