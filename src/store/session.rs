//! Session state and the store that owns it.
//!
//! `StateStore` is the single source of truth for "am I logged in" and
//! "who am I". It is mutated from the caller's completion-handling context
//! (single writer in practice); the `RwLock` is held only for short
//! synchronous sections, never across an await.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::blob::{self, StateDocument};
use crate::store::cache::LocalCache;

/// Authentication and identity state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque JWT minted by the backend; `None` means anonymous
    pub token: Option<String>,
    /// Id of the authenticated user, known after the first profile fetch
    pub user_id: Option<String>,
    /// Release check passed for this login
    pub verified: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Owns the session and the local cache, persisting both as one blob.
#[derive(Debug)]
pub struct StateStore {
    session: RwLock<Session>,
    cache: LocalCache,
    /// `None` disables persistence (tests)
    path: Option<PathBuf>,
}

impl StateStore {
    /// Load persisted state from `path`, or start fresh. Never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = blob::load(&path);
        let cache = LocalCache::default();
        cache.hydrate(doc.cache);
        Self {
            session: RwLock::new(doc.session),
            cache,
            path: Some(path),
        }
    }

    /// Store without a backing file. Used in tests.
    pub fn in_memory() -> Self {
        Self {
            session: RwLock::new(Session::default()),
            cache: LocalCache::default(),
            path: None,
        }
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }

    /// Copy of the current session.
    pub fn session(&self) -> Session {
        self.session.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().expect("session lock poisoned").is_authenticated()
    }

    /// The current token, or `MissingToken`. Authenticated calls go through
    /// this before any request is built.
    pub fn require_token(&self) -> Result<String, ApiError> {
        self.session
            .read()
            .expect("session lock poisoned")
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)
    }

    /// Install a freshly minted token (login/register success) and persist.
    /// Identity and verification are reset: they belong to the previous
    /// token.
    pub fn establish(&self, token: String) {
        {
            let mut session = self.session.write().expect("session lock poisoned");
            session.token = Some(token);
            session.user_id = None;
            session.verified = false;
        }
        self.save();
    }

    /// Record the authenticated identity after a successful user fetch.
    pub fn set_user_id(&self, user_id: String) {
        {
            let mut session = self.session.write().expect("session lock poisoned");
            session.user_id = Some(user_id);
        }
        self.save();
    }

    /// Mark the release check as passed for this login.
    pub fn set_verified(&self) {
        {
            let mut session = self.session.write().expect("session lock poisoned");
            session.verified = true;
        }
        self.save();
    }

    /// Clear token, identity, and verification; persist immediately.
    pub fn logout(&self) {
        {
            let mut session = self.session.write().expect("session lock poisoned");
            *session = Session::default();
        }
        self.save();
        tracing::info!("Logged out, session cleared");
    }

    /// Persist the current session + cache snapshot. Non-fatal on failure.
    pub fn save(&self) {
        let Some(path) = &self.path else { return };
        let doc = StateDocument::new(self.session(), self.cache.snapshot());
        blob::save(path, &doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = StateStore::in_memory();
        store.establish(String::new());
        assert!(!store.is_authenticated());
        assert!(matches!(
            store.require_token(),
            Err(ApiError::MissingToken)
        ));
    }

    #[test]
    fn test_establish_resets_identity_and_verification() {
        let store = StateStore::in_memory();
        store.establish("T1".to_string());
        store.set_user_id("u1".to_string());
        store.set_verified();

        store.establish("T2".to_string());
        let session = store.session();
        assert_eq!(session.token.as_deref(), Some("T2"));
        assert!(session.user_id.is_none());
        assert!(!session.verified);
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = StateStore::in_memory();
        store.establish("T1".to_string());
        store.set_user_id("u1".to_string());
        store.logout();
        assert_eq!(store.session(), Session::default());
    }
}
