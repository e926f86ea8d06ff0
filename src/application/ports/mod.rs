// src/application/ports/mod.rs
pub mod session;
pub mod time;
pub mod util;
