use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, CategoryCatalog};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) categories: Arc<CategoryCatalog>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, categories: Arc<CategoryCatalog>) -> Self {
        Self {
            read_repo,
            categories,
        }
    }
}
