// SPDX-License-Identifier: MIT

//! Services module: transport, account lifecycle, profile sync, images.

pub mod account;
pub mod api;
pub mod images;
pub mod profile;

pub use account::{AccountService, ReleaseStatus};
pub use api::ApiClient;
pub use images::ImageService;
pub use profile::{
    PartialProfile, ProfileFetchError, ProfilePatch, ProfilePatchError, ProfileSection,
    ProfileService,
};
