use super::ArticleCommandService;
use crate::{
    application::{
        commands::lookup::load_article,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article,
        specifications::{ArticleSpecification, IsArticleAuthorSpec},
    },
};

/// An article that exists, together with whether the acting user wrote it.
#[derive(Debug, Clone)]
pub struct ArticleVerification {
    pub article: Article,
    pub is_author: bool,
}

impl ArticleCommandService {
    pub async fn verify_article(
        &self,
        article_id: &str,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ArticleVerification> {
        let article = load_article(self.read_repo.as_ref(), article_id).await?;
        let is_author = IsArticleAuthorSpec::new(&article, &actor.id).is_satisfied();
        Ok(ArticleVerification { article, is_author })
    }

    /// Like [`Self::verify_article`], but fails with `denied` unless the
    /// actor is the author.
    pub(super) async fn verify_author(
        &self,
        article_id: &str,
        actor: &AuthenticatedUser,
        denied: &str,
    ) -> ApplicationResult<Article> {
        let ArticleVerification { article, is_author } =
            self.verify_article(article_id, actor).await?;

        if !is_author {
            tracing::debug!(article_id = %article.id, user_id = %actor.id, "ownership check failed");
            return Err(ApplicationError::forbidden(denied));
        }

        Ok(article)
    }
}
