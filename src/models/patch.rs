//! Sparse patch payloads.
//!
//! The server interprets a missing key as "leave unchanged", so every
//! optional field uses `skip_serializing_if`: a key only appears on the
//! wire when the caller set it. `patchUserId` is always sent.

use serde::Serialize;

/// `PATCH /user` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub patch_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bool>,
}

/// `PATCH /user/socialmedia` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPatch {
    pub patch_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_name: Option<String>,
}

/// `PATCH /user/teachinginformation` body.
///
/// `teachesOnline` and `teachesInPerson` are required by the backend on
/// every teaching-info patch; only city and country are sparse.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingInfoPatch {
    pub patch_user_id: String,
    pub teaches_online: bool,
    pub teaches_in_person: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_country: Option<String>,
}

/// `PATCH /user/skills` body: replaces the user's teachable-skill list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillsPatch {
    pub patch_user_id: String,
    pub skill_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_patch_omits_unset_fields() {
        let patch = UserPatch {
            patch_user_id: "u1".to_string(),
            firstname: Some("Ada".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["patchUserId"], "u1");
        assert_eq!(obj["firstname"], "Ada");
    }

    #[test]
    fn test_teaching_patch_always_sends_flags() {
        let patch = TeachingInfoPatch {
            patch_user_id: "u1".to_string(),
            teaches_online: true,
            teaches_in_person: false,
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["teachesOnline"], true);
        assert_eq!(obj["teachesInPerson"], false);
        assert!(!obj.contains_key("teachingCity"));
    }
}
