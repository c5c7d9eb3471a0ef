// SPDX-License-Identifier: MIT

//! Local persistence: the session/cache state blob and the in-memory cache.

pub mod blob;
pub mod cache;
pub mod session;

pub use cache::{CachedImage, LocalCache};
pub use session::{Session, StateStore};
