//! Bearer token payload inspection. The backend's tokens are JWTs; the
//! middle segment carries the expiry and enough identity to fall back on
//! when the profile endpoint is unreachable.

use base64::engine::general_purpose;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::UserProfile;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// The backend nests identity under a `user` claim; top-level fields
    /// are honored too for tokens that flatten it.
    #[serde(default)]
    pub user: Option<IdentityClaims>,
    /// Expiry, unix seconds.
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityClaims {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TokenClaims {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.exp {
            Some(exp) => exp * 1000 < now.timestamp_millis(),
            None => false,
        }
    }

    /// Degraded profile built from whatever identity the token carries.
    /// Top-level claims win; the nested `user` object fills the gaps.
    pub fn into_profile(self) -> UserProfile {
        let nested = self.user.unwrap_or_default();
        UserProfile {
            id: self.id.or(nested.id).unwrap_or_default(),
            username: self.username.or(nested.username).unwrap_or_default(),
            email: self.email.or(nested.email).unwrap_or_default(),
        }
    }
}

/// Decode the claims segment of a JWT without verifying the signature.
/// Returns `None` for anything that is not a three-segment token with a
/// JSON payload.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = decode_segment(segments[1])?;
    serde_json::from_slice(&payload).ok()
}

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(segment)
        .ok()
        .or_else(|| general_purpose::URL_SAFE.decode(segment).ok())
}
