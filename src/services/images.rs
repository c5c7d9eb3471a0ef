// SPDX-License-Identifier: MIT

//! Image server client.
//!
//! Upload is a multipart/form-data POST to `{data_url}/upload.php` with a
//! single `file` part named `{owner_id}_{key}.jpg`; the server stores it
//! under `/uploads/` with the same name, which makes download URLs
//! deterministic.

use std::sync::Arc;

use reqwest::multipart;

use crate::error::{ApiError, Result};
use crate::store::{CachedImage, StateStore};

#[derive(Clone)]
pub struct ImageService {
    http: reqwest::Client,
    data_url: String,
    store: Arc<StateStore>,
}

impl ImageService {
    pub fn new(data_url: impl Into<String>, store: Arc<StateStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            data_url: data_url.into(),
            store,
        }
    }

    /// Upload a JPEG blob for an owner + key. On success the blob is also
    /// written to the local cache so it can be shown before the next
    /// download.
    pub async fn upload(&self, owner_id: &str, key: &str, bytes: Vec<u8>) -> Result<()> {
        if owner_id.is_empty() {
            return Err(ApiError::InvalidArgument("owner id must not be empty"));
        }
        if key.is_empty() {
            return Err(ApiError::InvalidArgument("image key must not be empty"));
        }

        let filename = format!("{owner_id}_{key}.jpg");
        let part = multipart::Part::bytes(bytes.clone())
            .file_name(filename)
            .mime_str("image/jpeg")
            .map_err(ApiError::Network)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/upload.php", self.data_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        self.store.cache().put_image(CachedImage {
            owner_id: owner_id.to_string(),
            key: key.to_string(),
            bytes,
        });
        tracing::debug!(owner = owner_id, key, "Image uploaded and cached");
        Ok(())
    }

    /// Download URL for an owner + key.
    pub fn image_url(&self, owner_id: &str, key: &str) -> String {
        format!("{}/uploads/{}_{}.jpg", self.data_url, owner_id, key)
    }
}
