// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleBody, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub category: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let category = self.categories.resolve(&command.category)?;

        let id = self.ids.next_article_id()?;
        let slug = self.slug_service.generate_unique_slug(&title, &id).await?;

        let new_article = NewArticle {
            id,
            title,
            slug,
            body,
            category,
            author_id: actor.id.clone(),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, user_id = %actor.id, "article created");
        Ok(created.into())
    }
}
