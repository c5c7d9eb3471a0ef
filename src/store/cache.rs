//! Best-effort local cache of previously fetched resources.
//!
//! Populated opportunistically after successful fetches and consulted only
//! as a stale fallback when a live fetch is pending or failed. Values here
//! are never treated as fresher than a live result. Overwrite-on-write, no
//! eviction.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::models::{Skill, SkillCategory, UserProfile};

/// An image blob cached for an owner + key pair (e.g. profile pictures).
#[derive(Debug, Clone, PartialEq)]
pub struct CachedImage {
    pub owner_id: String,
    pub key: String,
    pub bytes: Vec<u8>,
}

/// In-memory cache maps. Reads never block on network activity.
#[derive(Debug, Default)]
pub struct LocalCache {
    users: DashMap<String, UserProfile>,
    categories: DashMap<i64, SkillCategory>,
    skills: DashMap<i64, Skill>,
    images: DashMap<(String, String), CachedImage>,
}

impl LocalCache {
    pub fn get_user(&self, id: &str) -> Option<UserProfile> {
        self.users.get(id).map(|e| e.clone())
    }

    pub fn put_user(&self, user: UserProfile) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn get_category(&self, id: i64) -> Option<SkillCategory> {
        self.categories.get(&id).map(|e| e.clone())
    }

    pub fn put_categories(&self, categories: &[SkillCategory]) {
        for category in categories {
            self.categories.insert(category.id, category.clone());
        }
    }

    pub fn get_skill(&self, id: i64) -> Option<Skill> {
        self.skills.get(&id).map(|e| e.clone())
    }

    pub fn put_skills(&self, skills: &[Skill]) {
        for skill in skills {
            self.skills.insert(skill.id, skill.clone());
        }
    }

    pub fn get_image(&self, owner_id: &str, key: &str) -> Option<CachedImage> {
        self.images
            .get(&(owner_id.to_string(), key.to_string()))
            .map(|e| e.clone())
    }

    pub fn put_image(&self, image: CachedImage) {
        self.images
            .insert((image.owner_id.clone(), image.key.clone()), image);
    }

    /// Serializable copy of the cache for the state blob.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            users: self.users.iter().map(|e| e.value().clone()).collect(),
            skill_categories: self.categories.iter().map(|e| e.value().clone()).collect(),
            skills: self.skills.iter().map(|e| e.value().clone()).collect(),
            images: self
                .images
                .iter()
                .map(|e| ImageRecord::from(e.value()))
                .collect(),
        }
    }

    /// Replace cache contents from a loaded snapshot.
    pub fn hydrate(&self, snapshot: CacheSnapshot) {
        for user in snapshot.users {
            self.users.insert(user.id.clone(), user);
        }
        for category in snapshot.skill_categories {
            self.categories.insert(category.id, category);
        }
        for skill in snapshot.skills {
            self.skills.insert(skill.id, skill);
        }
        for record in snapshot.images {
            match record.decode() {
                Ok(image) => self.put_image(image),
                Err(err) => {
                    tracing::warn!(owner = %record.owner, key = %record.key, error = %err,
                        "Dropping cached image with undecodable payload");
                }
            }
        }
    }
}

/// Cache contents as stored in the state blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheSnapshot {
    pub users: Vec<UserProfile>,
    pub skill_categories: Vec<SkillCategory>,
    pub skills: Vec<Skill>,
    pub images: Vec<ImageRecord>,
}

/// Image entry in the blob; bytes are base64 so the blob stays valid JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub owner: String,
    pub key: String,
    pub data: String,
}

impl ImageRecord {
    fn decode(&self) -> Result<CachedImage, base64::DecodeError> {
        use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
        Ok(CachedImage {
            owner_id: self.owner.clone(),
            key: self.key.clone(),
            bytes: BASE64.decode(&self.data)?,
        })
    }
}

impl From<&CachedImage> for ImageRecord {
    fn from(image: &CachedImage) -> Self {
        use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
        Self {
            owner: image.owner_id.clone(),
            key: image.key.clone(),
            data: BASE64.encode(&image.bytes),
        }
    }
}
