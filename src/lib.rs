// SPDX-License-Identifier: MIT

//! SkillLinkr client sync core.
//!
//! This crate is the data-synchronization and session layer of the
//! SkillLinkr skill-matching app: session persistence, the authenticated
//! API transport, typed resource accessors, the four-resource profile
//! fan-out, and a best-effort local cache. UI layers consume it and render
//! its results.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;

use config::Config;
use services::{AccountService, ApiClient, ImageService, ProfileService};
use store::StateStore;

/// Wired-up client: one state store shared by all services.
pub struct Client {
    pub config: Config,
    pub store: Arc<StateStore>,
    pub account: AccountService,
    pub profile: ProfileService,
    pub images: ImageService,
}

impl Client {
    /// Build a client from configuration, loading persisted state from the
    /// configured path.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(StateStore::open(&config.state_path));
        Self::with_store(config, store)
    }

    /// Build a client over an existing store. Tests use this with an
    /// in-memory store.
    pub fn with_store(config: Config, store: Arc<StateStore>) -> Self {
        let api = ApiClient::new(config.api_url.clone());
        let account = AccountService::new(api.clone(), store.clone());
        let profile = ProfileService::new(api.clone(), store.clone());
        let images = ImageService::new(config.data_url.clone(), store.clone());
        Self {
            config,
            store,
            account,
            profile,
            images,
        }
    }
}
