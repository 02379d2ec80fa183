//! In-memory user and location APIs for offline runs and tests.
//!
//! Seeded with a demo profile. Simulates network latency with a configurable delay.

use crate::domain::{
    DomainError, Location, NewUserPayload, PreferenceSet, RecentlyViewed, User, UserProfile,
};
use crate::ports::{LocationPort, UserApiPort};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// Mock user API. Records every write so callers can inspect them.
pub struct MockUserApi {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    profile: Mutex<UserProfile>,
    recently_viewed: Vec<String>,
    /// When set, every call fails with this message.
    failure: Option<String>,
    /// When set, only `get_recently_viewed` fails.
    history_failure: Option<String>,
    saved: Mutex<Vec<PreferenceSet>>,
    registered: Mutex<Vec<NewUserPayload>>,
}

impl MockUserApi {
    /// Create a mock API with default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            profile: Mutex::new(UserProfile {
                preferences: None,
                bookmarks: vec!["https://www.bbc.com/news/technology".to_string()],
                liked_articles: Vec::new(),
                reading_history: vec!["https://www.reuters.com/world/".to_string()],
            }),
            recently_viewed: vec![
                "https://www.reuters.com/world/".to_string(),
                "https://www.theguardian.com/science".to_string(),
            ],
            failure: None,
            history_failure: None,
            saved: Mutex::new(Vec::new()),
            registered: Mutex::new(Vec::new()),
        }
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        *self.profile.lock().unwrap_or_else(|e| e.into_inner()) = profile;
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn failing_history(mut self, message: &str) -> Self {
        self.history_failure = Some(message.to_string());
        self
    }

    /// Every preference set passed to `update_preferences`, oldest first.
    pub fn saved_preferences(&self) -> Vec<PreferenceSet> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every payload passed to `register`, oldest first.
    pub fn registered(&self) -> Vec<NewUserPayload> {
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn round_trip(&self) -> Result<(), DomainError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.failure {
            Some(msg) => Err(DomainError::Api(msg.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockUserApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserApiPort for MockUserApi {
    async fn get_profile(&self) -> Result<UserProfile, DomainError> {
        self.round_trip().await?;
        Ok(self
            .profile
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    async fn get_recently_viewed(&self) -> Result<RecentlyViewed, DomainError> {
        self.round_trip().await?;
        if let Some(msg) = &self.history_failure {
            return Err(DomainError::Api(msg.clone()));
        }
        Ok(RecentlyViewed {
            recently_viewed: self.recently_viewed.clone(),
        })
    }

    async fn update_preferences(&self, preferences: &PreferenceSet) -> Result<(), DomainError> {
        self.round_trip().await?;
        info!("[MOCK] storing preferences");
        self.profile
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .preferences = Some(preferences.clone());
        self.saved
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(preferences.clone());
        Ok(())
    }

    async fn register(&self, payload: &NewUserPayload) -> Result<User, DomainError> {
        self.round_trip().await?;
        info!(username = %payload.username, "[MOCK] registering user");
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(payload.clone());
        Ok(User::from(payload))
    }
}

/// Mock location service: fixed answer or a failure.
pub struct MockLocation {
    result: Option<Location>,
}

impl MockLocation {
    /// Succeeds with every field missing.
    pub fn unknown() -> Self {
        Self::at(Location::default())
    }

    pub fn at(location: Location) -> Self {
        Self {
            result: Some(location),
        }
    }

    pub fn failing() -> Self {
        Self { result: None }
    }
}

#[async_trait::async_trait]
impl LocationPort for MockLocation {
    async fn get_location(&self) -> Result<Location, DomainError> {
        self.result
            .clone()
            .ok_or_else(|| DomainError::Location("[MOCK] lookup failed".into()))
    }
}
