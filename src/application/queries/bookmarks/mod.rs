mod list;
mod service;

pub use list::ListBookmarkedArticlesQuery;
pub use service::BookmarkQueryService;
