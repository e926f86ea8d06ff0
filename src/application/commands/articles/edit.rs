use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleBody, ArticleTitle, ArticleUpdate},
};

pub struct EditArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
}

impl ArticleCommandService {
    pub async fn edit_article(
        &self,
        actor: &AuthenticatedUser,
        command: EditArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .verify_author(&command.id, actor, "You cannot edit this article")
            .await?;

        let EditArticleCommand {
            id: _,
            title,
            body,
            category,
        } = command;

        let title = title.map(ArticleTitle::new).transpose()?;
        let body = body.map(ArticleBody::new).transpose()?;
        let category = category
            .map(|value| self.categories.resolve(&value))
            .transpose()?;

        let mut update = ArticleUpdate::new(article.id.clone(), self.clock.now());

        if let Some(title) = title {
            if title != article.title {
                let slug = self
                    .slug_service
                    .generate_unique_slug(&title, &article.id)
                    .await?;
                update = update.with_slug(slug);
            }
            update = update.with_title(title);
        }
        if let Some(body) = body {
            update = update.with_body(body);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, user_id = %actor.id, "article edited");
        Ok(updated.into())
    }
}
