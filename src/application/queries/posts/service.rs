// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::application::ports::ContentClientPort;

pub struct PostQueryService {
    pub(super) content: Arc<ContentClientPort>,
    pub(super) page_size: u32,
}

impl PostQueryService {
    pub fn new(content: Arc<ContentClientPort>, page_size: u32) -> Self {
        Self { content, page_size }
    }
}
