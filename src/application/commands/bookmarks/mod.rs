mod add;
mod remove;
mod service;

pub use service::BookmarkCommandService;
