use super::BookmarkCommandService;
use crate::application::{
    commands::lookup::load_article,
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl BookmarkCommandService {
    pub async fn remove_bookmark(
        &self,
        me: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let article = load_article(self.read_repo.as_ref(), article_id).await?;

        if !article.is_bookmarked_by(&me.id) {
            return Err(ApplicationError::conflict(
                "You haven't bookmarked this article yet",
            ));
        }

        let bookmarks = self
            .write_repo
            .remove_from_bookmarks(&article.id, &me.id)
            .await?;
        tracing::debug!(article_id = %article.id, user_id = %me.id, "bookmark removed");
        Ok(bookmarks.into_iter().map(Into::into).collect())
    }
}
