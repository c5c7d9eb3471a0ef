// SPDX-License-Identifier: MIT

//! Profile synchronizer.
//!
//! A "full profile" is four independently-owned server resources (user,
//! social media, teaching info, skills) presented as one logical unit.
//! Fetching fans out four concurrent calls and joins all of them; a profile
//! is only assembled when every sub-fetch succeeded. Failures are
//! aggregated per section, never collapsed into the first one seen.
//!
//! Patching fans out the same way over the sections the caller supplied.
//! There is no cross-resource transaction: sections that patched stay
//! patched when others fail, and the caller re-fetches to observe
//! server-computed fields.

use std::fmt;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{
    FullProfile, Skill, SkillCategory, SocialMedia, SocialMediaPatch, TeachingInfoPatch,
    TeachingInformation, UserPatch, UserProfile, UserSkillsPatch,
};
use crate::services::ApiClient;
use crate::store::StateStore;

/// One of the four sub-resources composing a full profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    User,
    SocialMedia,
    TeachingInfo,
    Skills,
}

impl fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileSection::User => "user",
            ProfileSection::SocialMedia => "socialMedia",
            ProfileSection::TeachingInfo => "teachingInfo",
            ProfileSection::Skills => "skills",
        };
        f.write_str(name)
    }
}

/// Sections that did come back when a fetch partially failed. Fallback
/// display material; never a substitute for a `FullProfile`.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub user: Option<UserProfile>,
    pub social_media: Option<SocialMedia>,
    pub teaching_info: Option<TeachingInformation>,
    pub skills: Option<Vec<Skill>>,
}

/// Aggregate failure of a full-profile fetch: every failed section with its
/// cause, plus whatever did succeed.
#[derive(Debug)]
pub struct ProfileFetchError {
    pub partial: PartialProfile,
    pub failures: Vec<(ProfileSection, ApiError)>,
}

impl ProfileFetchError {
    /// All four sections failed before any request was sent.
    fn unauthenticated() -> Self {
        let failures = [
            ProfileSection::User,
            ProfileSection::SocialMedia,
            ProfileSection::TeachingInfo,
            ProfileSection::Skills,
        ]
        .into_iter()
        .map(|section| (section, ApiError::MissingToken))
        .collect();
        Self {
            partial: PartialProfile::default(),
            failures,
        }
    }

    pub fn failed_sections(&self) -> Vec<ProfileSection> {
        self.failures.iter().map(|(section, _)| *section).collect()
    }
}

impl fmt::Display for ProfileFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile fetch failed:")?;
        for (section, err) in &self.failures {
            write!(f, " {section}: {err};")?;
        }
        Ok(())
    }
}

impl std::error::Error for ProfileFetchError {}

/// Aggregate failure of a full-profile patch. Applied sections are not
/// rolled back.
#[derive(Debug)]
pub struct ProfilePatchError {
    pub applied: Vec<ProfileSection>,
    pub failures: Vec<(ProfileSection, ApiError)>,
}

impl ProfilePatchError {
    pub fn failed_sections(&self) -> Vec<ProfileSection> {
        self.failures.iter().map(|(section, _)| *section).collect()
    }
}

impl fmt::Display for ProfilePatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile patch failed:")?;
        for (section, err) in &self.failures {
            write!(f, " {section}: {err};")?;
        }
        Ok(())
    }
}

impl std::error::Error for ProfilePatchError {}

/// Independently-optional updates for each profile section. Sections left
/// as `None` produce no request at all. `patchUserId` inside the section
/// payloads is filled in by the service.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub user: Option<UserPatch>,
    pub social_media: Option<SocialMediaPatch>,
    pub teaching_info: Option<TeachingInfoPatch>,
    pub skills: Option<Vec<i64>>,
}

/// Fetches and patches the full profile over the four sub-resources.
#[derive(Clone)]
pub struct ProfileService {
    api: ApiClient,
    store: Arc<StateStore>,
}

impl ProfileService {
    pub fn new(api: ApiClient, store: Arc<StateStore>) -> Self {
        Self { api, store }
    }

    /// Fetch the authenticated user's full profile.
    ///
    /// Issues the four sub-fetches concurrently and waits for all of them;
    /// a slow or failing section never yields a partially-filled profile
    /// presented as complete. On success the user and skills are written to
    /// the local cache and the session records the authenticated identity.
    /// No automatic retry: retry is the caller's decision.
    pub async fn fetch_full_profile(&self) -> Result<FullProfile, ProfileFetchError> {
        let token = match self.store.require_token() {
            Ok(token) => token,
            Err(_) => return Err(ProfileFetchError::unauthenticated()),
        };

        let (user, social_media, teaching_info, skills) = tokio::join!(
            self.api.get_user(&token),
            self.api.get_social_media(&token),
            self.api.get_teaching_info(&token),
            self.api.get_user_skills(&token),
        );

        match (user, social_media, teaching_info, skills) {
            (Ok(user), Ok(social_media), Ok(teaching_info), Ok(skills)) => {
                self.store.cache().put_user(user.clone());
                self.store.cache().put_skills(&skills);
                self.store.set_user_id(user.id.clone());
                Ok(FullProfile {
                    user,
                    social_media,
                    teaching_info,
                    skills,
                })
            }
            (user, social_media, teaching_info, skills) => {
                let mut partial = PartialProfile::default();
                let mut failures = Vec::new();
                collect(ProfileSection::User, user, &mut partial.user, &mut failures);
                collect(
                    ProfileSection::SocialMedia,
                    social_media,
                    &mut partial.social_media,
                    &mut failures,
                );
                collect(
                    ProfileSection::TeachingInfo,
                    teaching_info,
                    &mut partial.teaching_info,
                    &mut failures,
                );
                collect(ProfileSection::Skills, skills, &mut partial.skills, &mut failures);
                tracing::warn!(
                    failed = ?failures.iter().map(|(s, _)| *s).collect::<Vec<_>>(),
                    "Full-profile fetch partially failed"
                );
                Err(ProfileFetchError { partial, failures })
            }
        }
    }

    /// Patch the supplied profile sections concurrently.
    ///
    /// Sparse semantics throughout: sections the caller did not supply
    /// produce no request, and within a section only set fields reach the
    /// wire. Successes are not rolled back on partial failure, and nothing
    /// is re-fetched afterwards; the profile is stale until the caller
    /// fetches again. Callers must not start a second patch for the same
    /// section before observing the previous result; no internal
    /// serialization is provided.
    pub async fn patch_full_profile(
        &self,
        patch_user_id: &str,
        patch: ProfilePatch,
    ) -> Result<(), ProfilePatchError> {
        let token = match self.store.require_token() {
            Ok(token) => token,
            Err(_) => {
                let failures = supplied_sections(&patch)
                    .into_iter()
                    .map(|section| (section, ApiError::MissingToken))
                    .collect();
                return Err(ProfilePatchError {
                    applied: Vec::new(),
                    failures,
                });
            }
        };

        let user_patch = patch.user.map(|mut p| {
            p.patch_user_id = patch_user_id.to_string();
            p
        });
        let social_patch = patch.social_media.map(|mut p| {
            p.patch_user_id = patch_user_id.to_string();
            p
        });
        let teaching_patch = patch.teaching_info.map(|mut p| {
            p.patch_user_id = patch_user_id.to_string();
            p
        });
        let skills_patch = patch.skills.map(|skill_ids| UserSkillsPatch {
            patch_user_id: patch_user_id.to_string(),
            skill_ids,
        });

        let token = token.as_str();
        let (user, social_media, teaching_info, skills) = tokio::join!(
            maybe(user_patch, |p| async move {
                self.api.patch_user(token, &p).await
            }),
            maybe(social_patch, |p| async move {
                self.api.patch_social_media(token, &p).await
            }),
            maybe(teaching_patch, |p| async move {
                self.api.patch_teaching_info(token, &p).await
            }),
            maybe(skills_patch, |p| async move {
                self.api.patch_user_skills(token, &p).await
            }),
        );

        let mut applied = Vec::new();
        let mut failures = Vec::new();
        for (section, outcome) in [
            (ProfileSection::User, user),
            (ProfileSection::SocialMedia, social_media),
            (ProfileSection::TeachingInfo, teaching_info),
            (ProfileSection::Skills, skills),
        ] {
            match outcome {
                None => {}
                Some(Ok(_)) => applied.push(section),
                Some(Err(err)) => failures.push((section, err)),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            tracing::warn!(
                failed = ?failures.iter().map(|(s, _)| *s).collect::<Vec<_>>(),
                applied = ?applied,
                "Full-profile patch partially failed"
            );
            Err(ProfilePatchError { applied, failures })
        }
    }

    /// Fetch the skill-category catalog, writing it through to the cache.
    pub async fn fetch_skill_categories(&self) -> Result<Vec<SkillCategory>, ApiError> {
        let token = self.store.require_token()?;
        let categories = self.api.get_skill_categories(&token).await?;
        self.store.cache().put_categories(&categories);
        Ok(categories)
    }

    /// Fetch all skills in a category, writing them through to the cache.
    pub async fn fetch_skills_in_category(&self, category_id: i64) -> Result<Vec<Skill>, ApiError> {
        let token = self.store.require_token()?;
        let skills = self.api.get_skills_by_category(&token, category_id).await?;
        self.store.cache().put_skills(&skills);
        Ok(skills)
    }
}

/// Record one joined sub-result into either the partial profile or the
/// failure list.
fn collect<T>(
    section: ProfileSection,
    result: Result<T, ApiError>,
    slot: &mut Option<T>,
    failures: &mut Vec<(ProfileSection, ApiError)>,
) {
    match result {
        Ok(value) => *slot = Some(value),
        Err(err) => failures.push((section, err)),
    }
}

/// Run `f` only when the section was supplied.
async fn maybe<P, F, Fut>(payload: Option<P>, f: F) -> Option<Result<String, ApiError>>
where
    F: FnOnce(P) -> Fut,
    Fut: std::future::Future<Output = Result<String, ApiError>>,
{
    match payload {
        Some(payload) => Some(f(payload).await),
        None => None,
    }
}

fn supplied_sections(patch: &ProfilePatch) -> Vec<ProfileSection> {
    let mut sections = Vec::new();
    if patch.user.is_some() {
        sections.push(ProfileSection::User);
    }
    if patch.social_media.is_some() {
        sections.push(ProfileSection::SocialMedia);
    }
    if patch.teaching_info.is_some() {
        sections.push(ProfileSection::TeachingInfo);
    }
    if patch.skills.is_some() {
        sections.push(ProfileSection::Skills);
    }
    sections
}
