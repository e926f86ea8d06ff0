mod by_category;
mod get_by_slug;
mod service;

pub use by_category::ListArticlesByCategoryQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use service::ArticleQueryService;
