pub mod articles;
pub mod bookmarks;
