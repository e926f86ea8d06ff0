use super::BookmarkCommandService;
use crate::application::{
    commands::lookup::load_article,
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl BookmarkCommandService {
    /// Bookmarks the article for `me` and returns everything `me` has
    /// bookmarked afterwards.
    pub async fn add_bookmark(
        &self,
        me: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let article = load_article(self.read_repo.as_ref(), article_id).await?;

        if article.is_bookmarked_by(&me.id) {
            return Err(ApplicationError::conflict(
                "You have already bookmarked this article",
            ));
        }

        let bookmarks = self
            .write_repo
            .insert_in_bookmarks(&article.id, &me.id)
            .await?;
        tracing::debug!(article_id = %article.id, user_id = %me.id, "bookmark added");
        Ok(bookmarks.into_iter().map(Into::into).collect())
    }
}
