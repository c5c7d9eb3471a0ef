//! Client configuration: API and image-server base URLs plus the location
//! of the persisted state file. Values come from environment variables with
//! hardcoded production defaults, matching what ships in the app bundle.

use std::env;
use std::path::PathBuf;

/// Default API base URL baked into the client.
pub const DEFAULT_API_URL: &str = "https://skilllinkr.micstudios.de/api";

/// Default image-server base URL.
pub const DEFAULT_DATA_URL: &str = "https://images.skilllinkr.micstudios.de";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// REST API base URL (no trailing slash)
    pub api_url: String,
    /// Image server base URL (no trailing slash)
    pub data_url: String,
    /// Where the persisted session/cache blob lives
    pub state_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            state_path: PathBuf::from("skilllinkr_state.json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// production defaults. Never fails: every setting has a default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_url: env::var("SKILLLINKR_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            data_url: env::var("SKILLLINKR_DATA_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_DATA_URL.to_string()),
            state_path: env::var("SKILLLINKR_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("skilllinkr_state.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_env_override_strips_trailing_slash() {
        env::set_var("SKILLLINKR_API_URL", "http://localhost:3000/api/");
        let config = Config::from_env();
        assert_eq!(config.api_url, "http://localhost:3000/api");
        env::remove_var("SKILLLINKR_API_URL");
    }
}
