use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleFilter,
};

pub struct ListArticlesByCategoryQuery {
    pub category: String,
}

impl ArticleQueryService {
    /// Published articles filed under the category.
    pub async fn list_articles_by_category(
        &self,
        query: ListArticlesByCategoryQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let category = self.categories.resolve(&query.category)?;
        let filter = ArticleFilter::new()
            .with_category(category)
            .with_published(true);

        let articles = self.read_repo.find_by_filter(&filter).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
