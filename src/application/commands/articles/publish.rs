use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::{ArticleSpecification, PublishStateSpec},
};

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .verify_author(article_id, actor, "You cannot publish this article")
            .await?;

        if !PublishStateSpec::unpublished(&article).is_satisfied() {
            return Err(ApplicationError::conflict("Article is published already"));
        }

        let updated = self
            .write_repo
            .set_published(&article.id, true, self.clock.now())
            .await?;
        tracing::info!(article_id = %updated.id, user_id = %actor.id, "article published");
        Ok(updated.into())
    }

    pub async fn unpublish_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .verify_author(article_id, actor, "You cannot un-publish this article")
            .await?;

        if !PublishStateSpec::published(&article).is_satisfied() {
            return Err(ApplicationError::conflict(
                "Article has not been published yet",
            ));
        }

        let updated = self
            .write_repo
            .set_published(&article.id, false, self.clock.now())
            .await?;
        tracing::info!(article_id = %updated.id, user_id = %actor.id, "article unpublished");
        Ok(updated.into())
    }
}
