//! Persisted state document.
//!
//! One JSON blob holds the session and the cache snapshot. The document is
//! versioned: the current layout carries `"version": 2`. Blobs written by
//! the first app generation (a flat layout with `apiURL`/`dataURL` inline)
//! are recognized and migrated once at load time, so only one schema is
//! ever live in memory.
//!
//! Loading never fails: a missing, corrupt, or unmigratable blob yields the
//! default state, which is simply "no session".

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::cache::CacheSnapshot;
use crate::store::session::Session;

/// Current blob version.
const CURRENT_VERSION: u32 = 2;

/// The on-disk document, current layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub session: Session,
    #[serde(default)]
    pub cache: CacheSnapshot,
}

impl Default for StateDocument {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            saved_at: Utc::now(),
            session: Session::default(),
            cache: CacheSnapshot::default(),
        }
    }
}

impl StateDocument {
    pub fn new(session: Session, cache: CacheSnapshot) -> Self {
        Self {
            version: CURRENT_VERSION,
            saved_at: Utc::now(),
            session,
            cache,
        }
    }
}

/// First-generation blob layout: settings, token, and cache in one flat
/// object. Only the fields the migration needs are modeled; everything
/// else in the legacy blob is presentation state and is dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyDocument {
    /// Present in every legacy blob; used to tell the layouts apart.
    #[serde(rename = "apiURL")]
    api_url: String,
    user_token: Option<String>,
    user: Option<serde_json::Value>,
    #[serde(default)]
    cache: LegacyCache,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCache {
    skills: Option<serde_json::Value>,
    skill_categories: Option<serde_json::Value>,
    users: Option<serde_json::Value>,
    cached_images: Option<serde_json::Value>,
}

/// Load the state document from `path`. Corrupt data is treated as "no
/// session", never as an error.
pub fn load(path: &Path) -> StateDocument {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No persisted state, starting fresh");
            return StateDocument::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err,
                "Failed to read persisted state, starting fresh");
            return StateDocument::default();
        }
    };

    match serde_json::from_str::<StateDocument>(&raw) {
        Ok(doc) if doc.version == CURRENT_VERSION => doc,
        Ok(doc) => {
            tracing::warn!(version = doc.version, "Unknown state version, starting fresh");
            StateDocument::default()
        }
        Err(_) => match serde_json::from_str::<LegacyDocument>(&raw) {
            Ok(legacy) => {
                tracing::info!("Migrating legacy state blob");
                migrate(legacy)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Corrupt persisted state, starting fresh");
                StateDocument::default()
            }
        },
    }
}

/// Serialize and persist the document. Failure is logged, not raised: the
/// in-memory state stays authoritative until the next restart.
pub fn save(path: &Path, doc: &StateDocument) {
    let json = match serde_json::to_string(doc) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to serialize state, not persisting");
            return;
        }
    };
    if let Err(err) = std::fs::write(path, json) {
        tracing::warn!(path = %path.display(), error = %err, "Failed to persist state");
    }
}

/// One-shot migration from the first-generation layout. The token and
/// identity carry over; cache entries carry over where they still decode
/// under the current model.
fn migrate(legacy: LegacyDocument) -> StateDocument {
    let _ = legacy.api_url; // base URLs now live in Config, not the blob

    let user_id = legacy
        .user
        .as_ref()
        .and_then(|u| u.get("id"))
        .and_then(|id| id.as_str())
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    let session = Session {
        token: legacy.user_token.filter(|t| !t.is_empty()),
        user_id,
        verified: false,
    };

    fn decode_list<T: serde::de::DeserializeOwned>(value: Option<serde_json::Value>) -> Vec<T> {
        value
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    let cache = CacheSnapshot {
        users: decode_list(legacy.cache.users),
        skill_categories: decode_list(legacy.cache.skill_categories),
        skills: decode_list(legacy.cache.skills),
        images: decode_list(legacy.cache.cached_images),
    };

    StateDocument::new(session, cache)
}
