//! User profile model.

use serde::{Deserialize, Serialize};

use crate::models::{Skill, SocialMedia, TeachingInformation};

/// A user as returned by `GET /user`. Server-authoritative; the client only
/// ever holds a cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub mail: String,
    /// Account-approval flag gating the main app experience
    pub released: bool,
    pub role: UserRole,
    /// Server-computed timestamp, carried verbatim
    pub created_at: String,
    pub updated_at: String,
}

/// Role attached to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Client-side composition of the four independently-owned profile
/// resources. Only assembled when all four fetches succeeded; a partial
/// result never presents as a `FullProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProfile {
    pub user: UserProfile,
    pub social_media: SocialMedia,
    pub teaching_info: TeachingInformation,
    pub skills: Vec<Skill>,
}
