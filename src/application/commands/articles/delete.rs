// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl ArticleCommandService {
    pub async fn remove_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<()> {
        let article = self
            .verify_author(article_id, actor, "You cannot delete this article")
            .await?;

        self.write_repo.delete(&article.id).await?;
        tracing::info!(article_id = %article.id, user_id = %actor.id, "article removed");
        Ok(())
    }
}
