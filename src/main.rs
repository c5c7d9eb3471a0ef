// SPDX-License-Identifier: MIT

//! Demo CLI: log in, check the release flag, fetch the full profile.
//!
//! Credentials come from `SKILLLINKR_MAIL` / `SKILLLINKR_PASSWORD`; base
//! URLs and the state path from the usual config env vars.

use skilllinkr_client::{config::Config, services::ReleaseStatus, Client};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    tracing::info!(api = %config.api_url, "Starting SkillLinkr sync client");
    let client = Client::new(config);

    if !client.store.is_authenticated() {
        let mail = std::env::var("SKILLLINKR_MAIL")?;
        let password = std::env::var("SKILLLINKR_PASSWORD")?;
        client.account.login(&mail, &password).await?;
    } else {
        tracing::info!("Reusing persisted session");
    }

    match client.account.check_release().await? {
        ReleaseStatus::Released => tracing::info!("Account is released"),
        ReleaseStatus::NotReleased { reason } => {
            tracing::warn!(%reason, "Account is not released");
            return Ok(());
        }
        ReleaseStatus::Unknown { reason } => {
            tracing::warn!(%reason, "Release status could not be determined");
            return Ok(());
        }
    }

    match client.profile.fetch_full_profile().await {
        Ok(profile) => {
            println!(
                "{} {} <{}>: {} skill(s), teaches {}",
                profile.user.firstname,
                profile.user.lastname,
                profile.user.mail,
                profile.skills.len(),
                match (
                    profile.teaching_info.teaches_online,
                    profile.teaching_info.teaches_in_person
                ) {
                    (true, true) => "online and in person",
                    (true, false) => "online",
                    (false, true) => "in person",
                    (false, false) => "nothing yet",
                }
            );
        }
        Err(err) => {
            for (section, cause) in &err.failures {
                eprintln!("{section} failed: {cause}");
            }
            return Err(err.into());
        }
    }

    Ok(())
}
