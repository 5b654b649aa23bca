//! Authenticated identity for the process. The bearer token is mirrored to
//! a JSON file under the data dir so a restart can resume the session; the
//! profile itself is never persisted.

mod token;

pub use token::{decode_claims, IdentityClaims, TokenClaims};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::constants::CREDENTIALS_FILE;
use crate::models::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub profile: UserProfile,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    token: Option<String>,
}

pub struct SessionStore {
    path: PathBuf,
    session: Option<Session>,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CREDENTIALS_FILE),
            session: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.profile)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Token currently mirrored on disk, if any.
    pub fn stored_token(&self) -> Option<String> {
        Self::load_from_file(&self.path).token
    }

    /// Startup restore. Absent token leaves the store unauthenticated; an
    /// expired or undecodable token is discarded from disk; a live token is
    /// installed on the client and the profile fetched, falling back to the
    /// identity embedded in the token when the fetch fails.
    pub async fn restore(&mut self, api: &mut ApiClient) {
        let Some(stored) = self.take_valid_token() else {
            return;
        };
        api.set_token(stored.clone());
        match api.fetch_profile().await {
            Ok(profile) => {
                self.session = Some(Session {
                    token: stored,
                    profile,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed, using identity from token");
                let claims = token::decode_claims(&stored).unwrap_or_default();
                self.session = Some(Session {
                    token: stored,
                    profile: claims.into_profile(),
                });
            }
        }
    }

    /// Read the mirrored token and vet it, clearing the mirror when the
    /// token is unusable.
    fn take_valid_token(&mut self) -> Option<String> {
        let stored = self.stored_token()?;
        let Some(claims) = token::decode_claims(&stored) else {
            tracing::warn!("stored credential is not decodable, discarding");
            self.clear();
            return None;
        };
        if claims.is_expired(Utc::now()) {
            tracing::info!("stored credential expired, discarding");
            self.clear();
            return None;
        }
        Some(stored)
    }

    /// Persist the token and adopt the profile. Login, signup, and profile
    /// update all land here; profile update passes the existing token back
    /// in since the backend does not reissue one.
    pub fn establish(&mut self, token: String, profile: UserProfile) {
        self.persist_token(&token);
        self.session = Some(Session { token, profile });
    }

    /// Drop the session and the on-disk mirror.
    pub fn clear(&mut self) {
        self.session = None;
        if self.path.exists() {
            if let Err(err) = fs::remove_file(&self.path) {
                tracing::warn!(error = %err, "failed to remove stored credential");
            }
        }
    }

    fn load_from_file(path: &Path) -> StoredCredentials {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn persist_token(&self, token: &str) {
        let stored = StoredCredentials {
            token: Some(token.to_string()),
        };
        if let Ok(json) = serde_json::to_string_pretty(&stored) {
            if let Err(err) = fs::write(&self.path, json) {
                tracing::warn!(error = %err, "failed to persist credential");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose;
    use base64::Engine;
    use tempfile::tempdir;

    fn token_with_exp(exp: i64) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD
            .encode(format!(r#"{{"id":"u1","username":"sam","exp":{}}}"#, exp));
        format!("{}.{}.sig", header, payload)
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            username: "sam".to_string(),
            email: "sam@example.com".to_string(),
        }
    }

    #[test]
    fn test_establish_persists_token() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        assert!(!store.is_authenticated());

        store.establish("tok-123".to_string(), profile());
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("tok-123"));

        // A fresh store over the same dir sees the mirrored token
        let other = SessionStore::new(dir.path());
        assert_eq!(other.stored_token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_clear_removes_mirror() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        store.establish("tok-123".to_string(), profile());

        store.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.stored_token(), None);
    }

    #[test]
    fn test_expired_token_discarded_at_restore() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        store.establish(token_with_exp(Utc::now().timestamp() - 3600), profile());
        store.session = None;

        assert!(store.take_valid_token().is_none());
        assert_eq!(store.stored_token(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_undecodable_token_discarded_at_restore() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        store.establish("garbage".to_string(), profile());
        store.session = None;

        assert!(store.take_valid_token().is_none());
        assert_eq!(store.stored_token(), None);
    }

    #[test]
    fn test_live_token_survives_vetting() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        let live = token_with_exp(Utc::now().timestamp() + 3600);
        store.establish(live.clone(), profile());
        store.session = None;

        assert_eq!(store.take_valid_token(), Some(live.clone()));
        assert_eq!(store.stored_token(), Some(live));
    }
}
