use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

pub struct BookmarkQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl BookmarkQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }
}
