// src/domain/object_id.rs
//! 24-character hexadecimal record identifiers shared by articles and users.

pub(crate) const OBJECT_ID_LEN: usize = 24;

/// Returns the lower-cased identifier when `raw` is exactly 24 hex digits.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    if raw.len() == OBJECT_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(raw.to_ascii_lowercase())
    } else {
        None
    }
}
