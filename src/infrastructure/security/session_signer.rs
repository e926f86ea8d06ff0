// src/infrastructure/security/session_signer.rs
//! Integrity protection for the session cookie.
//!
//! The cookie value is `<session-id>.<signature>` where the signature is the
//! unpadded base64url HMAC-SHA256 of the session id under the server secret.
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::application::error::ApplicationError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct SessionSigner {
    mac: HmacSha256,
}

impl SessionSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ApplicationError> {
        let mac = HmacSha256::new_from_slice(secret.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { mac })
    }

    pub fn sign(&self, session_id: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(session_id.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{session_id}.{signature}")
    }

    /// Returns the session id when the signature checks out.
    pub fn verify<'a>(&self, cookie_value: &'a str) -> Option<&'a str> {
        let (session_id, signature) = cookie_value.rsplit_once('.')?;
        if session_id.is_empty() {
            return None;
        }

        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;
        let mut mac = self.mac.clone();
        mac.update(session_id.as_bytes());
        mac.verify_slice(&signature).ok()?;
        Some(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn signed_values_verify() {
        let signer = SessionSigner::new(SECRET).unwrap();
        let cookie = signer.sign("session-1");
        assert_eq!(signer.verify(&cookie), Some("session-1"));
    }

    #[test]
    fn tampered_values_are_rejected() {
        let signer = SessionSigner::new(SECRET).unwrap();
        let cookie = signer.sign("session-1");
        let forged = cookie.replacen("session-1", "session-2", 1);
        assert_eq!(signer.verify(&forged), None);
        assert_eq!(signer.verify("session-1"), None);
        assert_eq!(signer.verify(".abc"), None);
        assert_eq!(signer.verify("session-1.not base64!"), None);
    }

    #[test]
    fn other_secrets_do_not_verify() {
        let signer = SessionSigner::new(SECRET).unwrap();
        let other = SessionSigner::new("another-secret-another-secret-xx").unwrap();
        assert_eq!(other.verify(&signer.sign("session-1")), None);
    }
}
