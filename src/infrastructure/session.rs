// src/infrastructure/session.rs
//! Signed preview cookie. The session ref travels client-side, so the value
//! is authenticated with HMAC-SHA256 before it is trusted on the way back.

use crate::application::dto::PreviewSession;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Cookie that holds the preview session between requests.
pub const PREVIEW_COOKIE: &str = "spacetrail_preview";

pub struct PreviewCookieCodec {
    key: Vec<u8>,
}

impl PreviewCookieCodec {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// `Set-Cookie` value establishing the session.
    pub fn issue(&self, session: &PreviewSession) -> String {
        format!(
            "{PREVIEW_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.encode(session)
        )
    }

    /// `Set-Cookie` value tearing the session down. Safe to send when no
    /// session exists.
    pub fn clear(&self) -> String {
        format!("{PREVIEW_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    pub fn encode(&self, session: &PreviewSession) -> String {
        let payload = URL_SAFE_NO_PAD.encode(session.preview_ref.as_bytes());
        let tag = URL_SAFE_NO_PAD.encode(self.mac(payload.as_bytes()));
        format!("{payload}.{tag}")
    }

    /// Decode a cookie value, returning `None` for anything that does not
    /// carry a valid signature. Tampered or truncated cookies simply mean
    /// no preview session.
    pub fn decode(&self, value: &str) -> Option<PreviewSession> {
        let (payload, tag) = value.split_once('.')?;
        let claimed = URL_SAFE_NO_PAD.decode(tag).ok()?;

        let mut mac = self.mac_instance();
        mac.update(payload.as_bytes());
        mac.verify_slice(&claimed).ok()?;

        let raw = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let preview_ref = String::from_utf8(raw).ok()?;
        Some(PreviewSession::new(preview_ref))
    }

    fn mac(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = self.mac_instance();
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }

    fn mac_instance(&self) -> HmacSha256 {
        // HMAC accepts keys of any length.
        HmacSha256::new_from_slice(&self.key).expect("hmac key length")
    }
}
