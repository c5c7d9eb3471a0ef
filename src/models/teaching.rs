//! Teaching preferences, one-to-one with a user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingInformation {
    pub id: i64,
    pub user_id: String,
    pub teaches_in_person: bool,
    pub teaches_online: bool,
    pub teaching_city: Option<String>,
    pub teaching_country: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
