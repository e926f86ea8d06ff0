use super::BookmarkQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleFilter, user::UserId},
};

pub struct ListBookmarkedArticlesQuery {
    pub user_id: String,
}

impl BookmarkQueryService {
    /// Every article the user has bookmarked, in store order. No paging.
    pub async fn list_bookmarked_articles(
        &self,
        query: ListBookmarkedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let user_id = UserId::new(&query.user_id)?;
        let filter = ArticleFilter::new().with_bookmarked_by(user_id);

        let articles = self.read_repo.find_by_filter(&filter).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
