use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl ArticleCommandService {
    pub async fn like_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.verify_article(article_id, actor).await?.article;

        if article.is_liked_by(&actor.id) {
            return Err(ApplicationError::conflict(
                "You have already liked this article",
            ));
        }

        let updated = self.write_repo.add_like(&article.id, &actor.id).await?;
        tracing::debug!(article_id = %updated.id, user_id = %actor.id, "article liked");
        Ok(updated.into())
    }

    pub async fn unlike_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.verify_article(article_id, actor).await?.article;

        if !article.is_liked_by(&actor.id) {
            return Err(ApplicationError::conflict(
                "You have not liked this article yet",
            ));
        }

        let updated = self.write_repo.remove_like(&article.id, &actor.id).await?;
        tracing::debug!(article_id = %updated.id, user_id = %actor.id, "article unliked");
        Ok(updated.into())
    }
}
