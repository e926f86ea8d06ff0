// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, bookmarks::BookmarkCommandService},
        ports::{
            session::SessionAuthenticator,
            time::Clock,
            util::{IdGenerator, SlugGenerator},
        },
        queries::{articles::ArticleQueryService, bookmarks::BookmarkQueryService},
    },
    domain::article::{
        ArticleReadRepository, ArticleWriteRepository, CategoryCatalog,
        services::ArticleSlugService,
    },
};

/// Collaborators the services are built from.
pub struct ServiceDependencies {
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub session_authenticator: Arc<dyn SessionAuthenticator>,
    pub categories: CategoryCatalog,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub ids: Arc<dyn IdGenerator>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub bookmark_commands: Arc<BookmarkCommandService>,
    pub bookmark_queries: Arc<BookmarkQueryService>,
    session_authenticator: Arc<dyn SessionAuthenticator>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            article_write_repo,
            article_read_repo,
            session_authenticator,
            categories,
            clock,
            slugger,
            ids,
        } = deps;
        let categories = Arc::new(categories);

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&categories),
            Arc::clone(&ids),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&categories),
        ));

        let bookmark_commands = Arc::new(BookmarkCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
        ));
        let bookmark_queries = Arc::new(BookmarkQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_commands,
            article_queries,
            bookmark_commands,
            bookmark_queries,
            session_authenticator,
        }
    }

    pub fn session_authenticator(&self) -> Arc<dyn SessionAuthenticator> {
        Arc::clone(&self.session_authenticator)
    }
}
