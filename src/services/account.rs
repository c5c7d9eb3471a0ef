// SPDX-License-Identifier: MIT

//! Account service: authentication-token lifecycle and the release check.

use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::services::ApiClient;
use crate::store::StateStore;

/// Outcome of the release check.
///
/// The account-approval flag gates the main app experience. A transport
/// failure is reported as `Unknown`, not as "not released": the caller
/// decides whether to retry or to fall back to the locked-out state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// The server confirmed the account is released.
    Released,
    /// The server explicitly rejected the account, with its message.
    NotReleased { reason: String },
    /// The server could not be reached or gave no interpretable answer.
    Unknown { reason: String },
}

impl ReleaseStatus {
    /// UI-facing gate: only an explicit confirmation opens the app.
    pub fn grants_access(&self) -> bool {
        matches!(self, ReleaseStatus::Released)
    }
}

/// Login, registration, logout, and release verification. Owns no state of
/// its own; the session store is the single source of truth.
#[derive(Clone)]
pub struct AccountService {
    api: ApiClient,
    store: Arc<StateStore>,
}

impl AccountService {
    pub fn new(api: ApiClient, store: Arc<StateStore>) -> Self {
        Self { api, store }
    }

    /// Log in with credentials. On success the token is installed in the
    /// session and persisted before this returns.
    pub async fn login(&self, mail: &str, password: &str) -> Result<()> {
        let token = self.api.login(mail, password).await?;
        self.store.establish(token);
        tracing::info!("Login succeeded, session established");
        Ok(())
    }

    /// Create an account. The server logs the new user straight in, so the
    /// token handling matches `login`.
    pub async fn register(
        &self,
        mail: &str,
        firstname: &str,
        lastname: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<()> {
        let token = self
            .api
            .register(mail, firstname, lastname, password, password_confirm)
            .await?;
        self.store.establish(token);
        tracing::info!("Registration succeeded, session established");
        Ok(())
    }

    /// Clear the session and persist immediately.
    pub fn logout(&self) {
        self.store.logout();
    }

    /// Check the account-approval flag. Fails fast with `MissingToken`
    /// (wrapped in `Unknown` is wrong here: an anonymous session is a
    /// caller bug, not an indeterminate server answer).
    pub async fn check_release(&self) -> Result<ReleaseStatus> {
        let token = self.store.require_token()?;
        let status = match self.api.get_release(&token).await {
            Ok(()) => {
                self.store.set_verified();
                ReleaseStatus::Released
            }
            Err(ApiError::Rejected { message }) => ReleaseStatus::NotReleased { reason: message },
            Err(err) if err.is_indeterminate() => {
                tracing::warn!(error = %err, "Release check could not be completed");
                ReleaseStatus::Unknown {
                    reason: err.to_string(),
                }
            }
            Err(err) => return Err(err),
        };
        Ok(status)
    }
}
