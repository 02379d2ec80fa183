//! Application configuration. API endpoints, credentials, timeouts.

use crate::domain::User;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOCATION_URL: &str = "http://localhost:8000/api/location";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Root of the user API. Read from NEWSDESK_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Location lookup endpoint. Read from NEWSDESK_LOCATION_URL.
    #[serde(default)]
    pub location_url: Option<String>,

    /// Bearer token for profile calls. Read from NEWSDESK_API_TOKEN.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds. Read from NEWSDESK_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Use the in-memory API instead of HTTP. Read from NEWSDESK_USE_MOCK_API.
    #[serde(default)]
    pub use_mock_api: Option<bool>,

    /// Signed-in account to restore at startup. Read from NEWSDESK_USER_EMAIL.
    #[serde(default)]
    pub user_email: Option<String>,

    /// Read from NEWSDESK_USERNAME.
    #[serde(default)]
    pub username: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NEWSDESK").try_parsing(true));
        if let Ok(path) = std::env::var("NEWSDESK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn location_url_or_default(&self) -> String {
        self.location_url
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION_URL.to_string())
    }

    /// Token if configured and non-empty.
    pub fn api_token(&self) -> Option<String> {
        self.api_token.clone().filter(|t| !t.is_empty())
    }

    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn use_mock_api(&self) -> bool {
        self.use_mock_api.unwrap_or(false)
    }

    /// User to seed the session with. Needs an email, and a token unless running on the mock API.
    pub fn restored_user(&self) -> Option<User> {
        let email = self.user_email.clone().filter(|e| !e.is_empty())?;
        if self.api_token().is_none() && !self.use_mock_api() {
            return None;
        }
        Some(User {
            username: self.username.clone().filter(|u| !u.is_empty()),
            email,
            ..Default::default()
        })
    }
}
