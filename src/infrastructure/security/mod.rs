// src/infrastructure/security/mod.rs
pub mod redis_session_store;
pub mod session_authenticator;
pub mod session_signer;
pub mod session_store;
