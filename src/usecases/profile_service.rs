//! Profile view: load profile and history, edit preferences, save, logout.
//!
//! Preference edits are optimistic: local state already holds the user's choices,
//! and a failed save only notifies; nothing is rolled back.

use crate::domain::{
    DomainError, Location, PreferenceCategory, PreferenceSet, ProfileStats, User, UserPatch,
    UserProfile,
};
use crate::ports::{LocationPort, NotifierPort, SessionPort, UserApiPort};
use std::sync::Arc;
use tracing::{info, warn};

pub const PREFERENCES_SAVED: &str = "Preferences saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Profile,
    Preferences,
    History,
    Bookmarks,
    Liked,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        Self::Profile,
        Self::Preferences,
        Self::History,
        Self::Bookmarks,
        Self::Liked,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Preferences => "Preferences",
            Self::History => "Reading History",
            Self::Bookmarks => "Bookmarks",
            Self::Liked => "Liked Articles",
        }
    }
}

impl std::fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Profile view state plus its collaborators.
pub struct ProfileService {
    api: Arc<dyn UserApiPort>,
    location: Arc<dyn LocationPort>,
    session: Arc<dyn SessionPort>,
    notifier: Arc<dyn NotifierPort>,
    profile: Option<UserProfile>,
    preferences: PreferenceSet,
    recently_viewed: Vec<String>,
    detected_location: Option<Location>,
    error: Option<String>,
    active_tab: ProfileTab,
}

impl ProfileService {
    pub fn new(
        api: Arc<dyn UserApiPort>,
        location: Arc<dyn LocationPort>,
        session: Arc<dyn SessionPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            api,
            location,
            session,
            notifier,
            profile: None,
            preferences: PreferenceSet::default(),
            recently_viewed: Vec::new(),
            detected_location: None,
            error: None,
            active_tab: ProfileTab::Profile,
        }
    }

    /// Mount: load profile when signed in, and look up location either way.
    pub async fn open(&mut self) {
        if self.session.current_user().await.is_some() {
            self.load().await;
        }
        self.detect_location().await;
    }

    /// Fetch profile, then recently viewed. A failure is kept as the view's error message.
    pub async fn load(&mut self) {
        match self.fetch().await {
            Ok(()) => self.error = None,
            Err(e) => {
                warn!(error = %e, "failed to load profile");
                self.error = Some(e.to_string());
            }
        }
    }

    async fn fetch(&mut self) -> Result<(), DomainError> {
        let profile = self.api.get_profile().await?;
        self.preferences = profile.preferences_or_default();
        self.profile = Some(profile);

        let history = self.api.get_recently_viewed().await?;
        self.recently_viewed = history.recently_viewed;
        info!(
            recently_viewed = self.recently_viewed.len(),
            "profile loaded"
        );
        Ok(())
    }

    /// Location lookup never surfaces an error; failure leaves it unknown.
    pub async fn detect_location(&mut self) {
        self.detected_location = match self.location.get_location().await {
            Ok(loc) => Some(loc),
            Err(e) => {
                warn!(error = %e, "location lookup failed");
                None
            }
        };
    }

    pub fn toggle_member(&mut self, category: PreferenceCategory, value: &str, included: bool) {
        self.preferences.toggle_member(category, value, included);
    }

    /// Push the full preference set. On success the session user is updated.
    ///
    /// Returns whether the save went through; the user is notified either way.
    pub async fn save_preferences(&mut self) -> bool {
        match self.api.update_preferences(&self.preferences).await {
            Ok(()) => {
                self.session
                    .update_user(UserPatch {
                        preferences: Some(self.preferences.clone()),
                    })
                    .await;
                info!(
                    topics = self.preferences.topics.len(),
                    sources = self.preferences.sources.len(),
                    countries = self.preferences.countries.len(),
                    "preferences saved"
                );
                self.notifier.notify(PREFERENCES_SAVED);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to save preferences");
                self.notifier
                    .notify(&format!("Failed to save preferences: {}", e));
                false
            }
        }
    }

    pub async fn logout(&self) {
        self.session.logout().await;
    }

    pub async fn user(&self) -> Option<User> {
        self.session.current_user().await
    }

    pub async fn stats(&self) -> ProfileStats {
        self.session
            .current_user()
            .await
            .map(|u| ProfileStats::from(&u))
            .unwrap_or_default()
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn recently_viewed(&self) -> &[String] {
        &self.recently_viewed
    }

    pub fn detected_location(&self) -> Option<&Location> {
        self.detected_location.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn active_tab(&self) -> ProfileTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::{MockLocation, MockUserApi};
    use crate::adapters::session::MemorySession;
    use crate::usecases::test_support::RecordingNotifier;

    fn signed_in_user() -> User {
        User {
            username: Some("alice".into()),
            email: "a@b.com".into(),
            bookmarks: vec!["https://x/1".into()],
            reading_history: vec!["https://x/2".into(), "https://x/3".into()],
            ..Default::default()
        }
    }

    struct Harness {
        service: ProfileService,
        api: Arc<MockUserApi>,
        session: Arc<MemorySession>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(api: MockUserApi, location: MockLocation, user: Option<User>) -> Harness {
        let api = Arc::new(api);
        let session = Arc::new(MemorySession::new(api.clone(), user));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ProfileService::new(
            api.clone(),
            Arc::new(location),
            session.clone(),
            notifier.clone(),
        );
        Harness {
            service,
            api,
            session,
            notifier,
        }
    }

    #[tokio::test]
    async fn test_profile_without_preferences_loads_empty_sets() {
        let api = MockUserApi::with_delay(0).with_profile(UserProfile::default());
        let mut h = harness(api, MockLocation::unknown(), Some(signed_in_user()));

        h.service.open().await;

        assert_eq!(h.service.preferences(), &PreferenceSet::default());
        assert!(h.service.error().is_none());
        assert!(h.service.profile().is_some());
    }

    #[tokio::test]
    async fn test_open_adopts_preferences_and_recently_viewed() {
        let mut prefs = PreferenceSet::default();
        prefs.topics.insert("health".into());
        let api = MockUserApi::with_delay(0).with_profile(UserProfile {
            preferences: Some(prefs.clone()),
            ..Default::default()
        });
        let mut h = harness(api, MockLocation::unknown(), Some(signed_in_user()));

        h.service.open().await;

        assert_eq!(h.service.preferences(), &prefs);
        assert_eq!(
            h.service.recently_viewed(),
            &[
                "https://www.reuters.com/world/".to_string(),
                "https://www.theguardian.com/science".to_string(),
            ]
        );
        assert!(h.service.error().is_none());
    }

    #[tokio::test]
    async fn test_history_failure_keeps_profile_and_records_error() {
        let mut prefs = PreferenceSet::default();
        prefs.countries.insert("de".into());
        let api = MockUserApi::with_delay(0)
            .with_profile(UserProfile {
                preferences: Some(prefs.clone()),
                ..Default::default()
            })
            .failing_history("history unavailable");
        let mut h = harness(api, MockLocation::unknown(), Some(signed_in_user()));

        h.service.load().await;

        assert_eq!(h.service.preferences(), &prefs);
        assert!(h.service.profile().is_some());
        assert!(h.service.recently_viewed().is_empty());
        assert!(h.service.error().unwrap().contains("history unavailable"));
    }

    #[tokio::test]
    async fn test_open_without_user_skips_load() {
        let api = MockUserApi::with_delay(0);
        let mut h = harness(api, MockLocation::unknown(), None);

        h.service.open().await;

        assert!(h.service.profile().is_none());
        assert!(h.service.recently_viewed().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_is_recorded() {
        let api = MockUserApi::with_delay(0).failing("server down");
        let mut h = harness(api, MockLocation::unknown(), Some(signed_in_user()));

        h.service.load().await;

        assert!(h.service.error().unwrap().contains("server down"));
        assert_eq!(h.service.preferences(), &PreferenceSet::default());
    }

    #[tokio::test]
    async fn test_location_failure_degrades_to_none() {
        let api = MockUserApi::with_delay(0);
        let mut h = harness(api, MockLocation::failing(), Some(signed_in_user()));
        h.service.detect_location().await;
        assert!(h.service.detected_location().is_none());
    }

    #[tokio::test]
    async fn test_location_success() {
        let loc = Location {
            city: Some("Paris".into()),
            country_code: Some("fr".into()),
            ..Default::default()
        };
        let api = MockUserApi::with_delay(0);
        let mut h = harness(api, MockLocation::at(loc.clone()), None);
        h.service.detect_location().await;
        assert_eq!(h.service.detected_location(), Some(&loc));
    }

    #[tokio::test]
    async fn test_save_success_merges_into_session_user() {
        let api = MockUserApi::with_delay(0);
        let mut h = harness(api, MockLocation::unknown(), Some(signed_in_user()));
        h.service.toggle_member(PreferenceCategory::Topics, "science", true);
        h.service.toggle_member(PreferenceCategory::Countries, "jp", true);

        assert!(h.service.save_preferences().await);

        let user = h.session.current_user().await.unwrap();
        assert_eq!(&user.preferences, h.service.preferences());
        assert_eq!(h.api.saved_preferences().len(), 1);
        assert_eq!(h.notifier.messages(), vec![PREFERENCES_SAVED]);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_local_edits() {
        let api = MockUserApi::with_delay(0).failing("boom");
        let mut h = harness(api, MockLocation::unknown(), Some(signed_in_user()));
        h.service.toggle_member(PreferenceCategory::Sources, "NPR", true);
        let before = h.service.preferences().clone();

        assert!(!h.service.save_preferences().await);

        assert_eq!(h.service.preferences(), &before);
        assert!(h.service.preferences().contains(PreferenceCategory::Sources, "NPR"));
        let user = h.session.current_user().await.unwrap();
        assert!(user.preferences.sources.is_empty());
        let messages = h.notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Failed to save preferences: "));
        assert!(messages[0].contains("boom"));
    }

    #[tokio::test]
    async fn test_stats_and_logout() {
        let api = MockUserApi::with_delay(0);
        let h = harness(api, MockLocation::unknown(), Some(signed_in_user()));

        assert_eq!(
            h.service.stats().await,
            ProfileStats {
                bookmarks: 1,
                liked: 0,
                read: 2
            }
        );
        h.service.logout().await;
        assert!(h.service.user().await.is_none());
        assert_eq!(h.service.stats().await, ProfileStats::default());
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(ProfileTab::History.to_string(), "Reading History");
        assert_eq!(ProfileTab::ALL.len(), 5);
    }
}
