//! Social media links, one-to-one with a user.

use serde::{Deserialize, Serialize};

/// Social media handles for a user. Each handle is individually nullable:
/// a missing field means "not set", which is distinct from an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub id: i64,
    pub user_id: String,
    pub discord_name: Option<String>,
    pub facebook_name: Option<String>,
    pub instagram_name: Option<String>,
    pub x_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
