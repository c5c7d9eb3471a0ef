// SPDX-License-Identifier: MIT

//! Wire data model for the SkillLinkr API.

pub mod envelope;
pub mod patch;
pub mod skill;
pub mod social;
pub mod teaching;
pub mod user;

pub use envelope::{Envelope, ErrorEnvelope, TokenPayload};
pub use patch::{SocialMediaPatch, TeachingInfoPatch, UserPatch, UserSkillsPatch};
pub use skill::{Skill, SkillCategory};
pub use social::SocialMedia;
pub use teaching::TeachingInformation;
pub use user::{FullProfile, UserProfile, UserRole};
