// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod edit;
mod like;
mod publish;
mod service;
mod verify;

pub use create::CreateArticleCommand;
pub use edit::EditArticleCommand;
pub use service::ArticleCommandService;
pub use verify::ArticleVerification;
