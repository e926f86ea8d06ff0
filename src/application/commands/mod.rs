pub mod articles;
pub mod bookmarks;
pub(crate) mod lookup;
