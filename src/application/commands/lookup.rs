// src/application/commands/lookup.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleId, ArticleReadRepository},
};

pub(crate) const ARTICLE_NOT_FOUND: &str = "Article not found";

/// Validates `raw_id` and loads the article it names. The id is checked
/// before the store is consulted.
pub(crate) async fn load_article(
    read_repo: &dyn ArticleReadRepository,
    raw_id: &str,
) -> ApplicationResult<Article> {
    let id = ArticleId::new(raw_id)?;
    read_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))
}
