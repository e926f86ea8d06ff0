// src/domain/mod.rs
pub mod article;
pub mod errors;
mod object_id;
pub mod user;
