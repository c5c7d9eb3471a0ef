// SPDX-License-Identifier: MIT

//! SkillLinkr API client.
//!
//! One uniform request path for every remote call:
//! - JSON content type on every request
//! - `Authorization: JWT <token>` on authenticated calls (the backend does
//!   not use the `Bearer` scheme; the prefix must stay bit-exact)
//! - 2xx decodes the `{status, message}` envelope, 400 decodes the error
//!   envelope into the server's message, everything else is surfaced with
//!   status and raw body
//!
//! The client never touches the session; token handling is the caller's
//! concern.

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::models::{
    Envelope, ErrorEnvelope, Skill, SkillCategory, SocialMedia, SocialMediaPatch,
    TeachingInfoPatch, TeachingInformation, TokenPayload, UserPatch, UserProfile,
    UserSkillsPatch,
};

/// Typed client for the SkillLinkr REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    // ─── Auth ────────────────────────────────────────────────────────────

    /// `POST /login`. Returns the minted token.
    pub async fn login(&self, mail: &str, password: &str) -> Result<String> {
        if mail.is_empty() {
            return Err(ApiError::InvalidArgument("mail must not be empty"));
        }
        let body = serde_json::json!({ "mail": mail, "password": password });
        let payload: TokenPayload = self.send(Method::POST, "/login", None, &body).await?;
        Ok(payload.token)
    }

    /// `POST /register`. The server answers 201 with a token envelope.
    pub async fn register(
        &self,
        mail: &str,
        firstname: &str,
        lastname: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<String> {
        if mail.is_empty() {
            return Err(ApiError::InvalidArgument("mail must not be empty"));
        }
        let body = serde_json::json!({
            "mail": mail,
            "firstname": firstname,
            "lastname": lastname,
            "password": password,
            "passwordConfirm": password_confirm,
        });
        let payload: TokenPayload = self.send(Method::POST, "/register", None, &body).await?;
        Ok(payload.token)
    }

    // ─── User and sub-resources (token-scoped) ───────────────────────────

    /// `GET /user`: the authenticated user's profile.
    pub async fn get_user(&self, token: &str) -> Result<UserProfile> {
        self.get("/user", token).await
    }

    /// `PATCH /user`. Sparse: only keys present in `patch` reach the wire.
    pub async fn patch_user(&self, token: &str, patch: &UserPatch) -> Result<String> {
        if patch.patch_user_id.is_empty() {
            return Err(ApiError::InvalidArgument("patchUserId must not be empty"));
        }
        self.send(Method::PATCH, "/user", Some(token), patch).await
    }

    /// `GET /user/socialmedia`.
    pub async fn get_social_media(&self, token: &str) -> Result<SocialMedia> {
        self.get("/user/socialmedia", token).await
    }

    /// `PATCH /user/socialmedia`.
    pub async fn patch_social_media(
        &self,
        token: &str,
        patch: &SocialMediaPatch,
    ) -> Result<String> {
        if patch.patch_user_id.is_empty() {
            return Err(ApiError::InvalidArgument("patchUserId must not be empty"));
        }
        self.send(Method::PATCH, "/user/socialmedia", Some(token), patch)
            .await
    }

    /// `GET /user/teachinginformation`.
    pub async fn get_teaching_info(&self, token: &str) -> Result<TeachingInformation> {
        self.get("/user/teachinginformation", token).await
    }

    /// `PATCH /user/teachinginformation`.
    pub async fn patch_teaching_info(
        &self,
        token: &str,
        patch: &TeachingInfoPatch,
    ) -> Result<String> {
        if patch.patch_user_id.is_empty() {
            return Err(ApiError::InvalidArgument("patchUserId must not be empty"));
        }
        self.send(Method::PATCH, "/user/teachinginformation", Some(token), patch)
            .await
    }

    /// `GET /user/skills`: the authenticated user's teachable skills.
    pub async fn get_user_skills(&self, token: &str) -> Result<Vec<Skill>> {
        self.get("/user/skills", token).await
    }

    /// `PATCH /user/skills`: replace the teachable-skill list.
    pub async fn patch_user_skills(
        &self,
        token: &str,
        patch: &UserSkillsPatch,
    ) -> Result<String> {
        if patch.patch_user_id.is_empty() {
            return Err(ApiError::InvalidArgument("patchUserId must not be empty"));
        }
        self.send(Method::PATCH, "/user/skills", Some(token), patch)
            .await
    }

    /// `GET /user/released`. `Ok(())` means the account is released; a 400
    /// rejection means it is not; any other failure means we could not
    /// tell. The release-status interpretation lives in the account
    /// service.
    pub async fn get_release(&self, token: &str) -> Result<()> {
        let response = self
            .request(Method::GET, "/user/released", Some(token))?
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        if status == StatusCode::BAD_REQUEST {
            return match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => Err(ApiError::Rejected {
                    message: envelope.message,
                }),
                Err(err) => Err(ApiError::Decode {
                    reason: err.to_string(),
                    body,
                }),
            };
        }
        Err(ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }

    // ─── Skill catalog ───────────────────────────────────────────────────

    /// `GET /skillcategories`.
    pub async fn get_skill_categories(&self, token: &str) -> Result<Vec<SkillCategory>> {
        self.get("/skillcategories", token).await
    }

    /// `GET /skillcategory/{id}`.
    pub async fn get_skill_category(&self, token: &str, id: i64) -> Result<SkillCategory> {
        self.get(&format!("/skillcategory/{id}"), token).await
    }

    /// `GET /skills/{categoryId}`: all skills in a category.
    pub async fn get_skills_by_category(&self, token: &str, category_id: i64) -> Result<Vec<Skill>> {
        self.get(&format!("/skills/{category_id}"), token).await
    }

    /// `GET /skill/specific/{id}`.
    pub async fn get_skill(&self, token: &str, id: i64) -> Result<Skill> {
        self.get(&format!("/skill/specific/{id}"), token).await
    }

    /// `GET /skill/teachers/{id}`: users teaching a skill.
    pub async fn get_skill_teachers(&self, token: &str, id: i64) -> Result<Vec<UserProfile>> {
        self.get(&format!("/skill/teachers/{id}"), token).await
    }

    // ─── Request plumbing ────────────────────────────────────────────────

    /// Authenticated GET with envelope decoding.
    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T> {
        let response = self.request(Method::GET, path, Some(token))?.send().await?;
        Self::read_envelope(response).await
    }

    /// Request with a JSON body and envelope decoding.
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(method, path, token)?
            .json(body)
            .send()
            .await?;
        Self::read_envelope(response).await
    }

    /// Build a request. Fails before anything is sent when an authenticated
    /// call has no token.
    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<reqwest::RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            if token.is_empty() {
                return Err(ApiError::MissingToken);
            }
            builder = builder.header(header::AUTHORIZATION, format!("JWT {token}"));
        }
        Ok(builder)
    }

    /// Map a response to the envelope payload per the uniform contract.
    async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str::<Envelope<T>>(&body)
                .map(|envelope| envelope.message)
                .map_err(|err| ApiError::Decode {
                    reason: err.to_string(),
                    body,
                });
        }

        if status == StatusCode::BAD_REQUEST {
            return match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => Err(ApiError::Rejected {
                    message: envelope.message,
                }),
                Err(err) => Err(ApiError::Decode {
                    reason: err.to_string(),
                    body,
                }),
            };
        }

        Err(ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
