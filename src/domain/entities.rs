//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — these are mapped from adapters.

use crate::domain::preferences::PreferenceSet;
use serde::{Deserialize, Serialize};

/// Summaries longer than this get a "show more" toggle.
pub const SUMMARY_CLAMP_CHARS: usize = 200;

const NO_SUMMARY: &str = "No summary available.";

/// A news article as handed to the detail view. Never mutated by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

impl Article {
    /// Text passed to the share sheet: summary, then description.
    pub fn share_text(&self) -> &str {
        non_empty(&self.summary)
            .or_else(|| non_empty(&self.description))
            .unwrap_or("")
    }

    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.url_to_image).or_else(|| non_empty(&self.image))
    }

    pub fn display_summary(&self) -> &str {
        match self.share_text() {
            "" => NO_SUMMARY,
            text => text,
        }
    }

    /// True when either the summary or the description is long enough to clamp.
    pub fn has_long_summary(&self) -> bool {
        let long = |s: &Option<String>| {
            non_empty(s).is_some_and(|v| v.chars().count() > SUMMARY_CLAMP_CHARS)
        };
        long(&self.summary) || long(&self.description)
    }
}

/// Profile as returned by the user API. Read-mostly from the client's side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
    #[serde(default)]
    pub bookmarks: Vec<String>,
    #[serde(default)]
    pub liked_articles: Vec<String>,
    #[serde(default)]
    pub reading_history: Vec<String>,
}

impl UserProfile {
    /// Preferences to seed the editor with; three empty sets when absent.
    pub fn preferences_or_default(&self) -> PreferenceSet {
        self.preferences.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentlyViewed {
    #[serde(default)]
    pub recently_viewed: Vec<String>,
}

/// Signed-in user held by the auth session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub preferences: PreferenceSet,
    #[serde(default)]
    pub bookmarks: Vec<String>,
    #[serde(default)]
    pub liked_articles: Vec<String>,
    #[serde(default)]
    pub reading_history: Vec<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.email)
    }

    /// Merge a partial update. Absent fields are left alone.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
    }
}

/// Partial user update passed to `SessionPort::update_user`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub preferences: Option<PreferenceSet>,
}

/// Counts shown in the profile header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub bookmarks: usize,
    pub liked: usize,
    pub read: usize,
}

impl From<&User> for ProfileStats {
    fn from(user: &User) -> Self {
        Self {
            bookmarks: user.bookmarks.len(),
            liked: user.liked_articles.len(),
            read: user.reading_history.len(),
        }
    }
}

/// Geolocation reported by the location service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// "City, Region, Country"; the country falls back to its code, then to "Unknown".
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let country = non_empty(&self.country_name)
            .or_else(|| non_empty(&self.country_code))
            .unwrap_or("Unknown");
        for part in [&self.city, &self.region].into_iter().filter_map(non_empty) {
            write!(f, "{}, ", part)?;
        }
        f.write_str(country)
    }
}

/// Body sent to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub preferences: PreferenceSet,
    pub bookmarks: Vec<String>,
    pub liked_articles: Vec<String>,
}

/// Session user for a freshly registered account, when the service does not echo one back.
impl From<&NewUserPayload> for User {
    fn from(payload: &NewUserPayload) -> Self {
        Self {
            username: Some(payload.username.clone()),
            email: payload.email.clone(),
            preferences: payload.preferences.clone(),
            bookmarks: payload.bookmarks.clone(),
            liked_articles: payload.liked_articles.clone(),
            reading_history: Vec::new(),
        }
    }
}

/// Where the UI should go after an action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}
