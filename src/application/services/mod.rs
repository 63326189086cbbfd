// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    ports::ContentClientPort, preview::PreviewService, queries::posts::PostQueryService,
};

pub struct ApplicationServices {
    pub post_queries: Arc<PostQueryService>,
    pub preview: Arc<PreviewService>,
}

impl ApplicationServices {
    pub fn new(content: Arc<ContentClientPort>, page_size: u32) -> Self {
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&content), page_size));
        let preview = Arc::new(PreviewService::new(Arc::clone(&content)));

        Self {
            post_queries,
            preview,
        }
    }
}
