// src/application/ports/util.rs
use crate::domain::{article::ArticleId, errors::DomainResult};

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Mints identifiers for newly authored articles.
pub trait IdGenerator: Send + Sync {
    fn next_article_id(&self) -> DomainResult<ArticleId>;
}
