//! Outbound ports. Application calls into collaborators.
//!
//! Implemented by adapters.

use crate::domain::{
    DomainError, Location, NewUserPayload, PreferenceSet, RecentlyViewed, ShareError, User,
    UserPatch, UserProfile,
};

/// User API. Profile reads, preference writes, account creation.
#[async_trait::async_trait]
pub trait UserApiPort: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile, DomainError>;

    async fn get_recently_viewed(&self) -> Result<RecentlyViewed, DomainError>;

    /// Replace the stored preferences with `preferences` in full.
    async fn update_preferences(&self, preferences: &PreferenceSet) -> Result<(), DomainError>;

    /// Create an account. Returns the user as stored by the service.
    async fn register(&self, payload: &NewUserPayload) -> Result<User, DomainError>;
}

/// Location lookup (IP geolocation).
#[async_trait::async_trait]
pub trait LocationPort: Send + Sync {
    async fn get_location(&self) -> Result<Location, DomainError>;
}

/// Auth/session context. Owns the signed-in user for the lifetime of the process.
#[async_trait::async_trait]
pub trait SessionPort: Send + Sync {
    async fn current_user(&self) -> Option<User>;

    async fn logout(&self);

    /// Merge a partial update into the current user. No-op when signed out.
    async fn update_user(&self, patch: UserPatch);

    /// Register and sign in.
    async fn register(&self, payload: NewUserPayload) -> Result<User, DomainError>;
}

/// Data handed to a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Native share capability. `ShareError::Unsupported` when the platform has none.
#[async_trait::async_trait]
pub trait SharePort: Send + Sync {
    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Clipboard write, used as the share fallback.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), DomainError>;
}

/// Blocking user notification (alert).
pub trait NotifierPort: Send + Sync {
    fn notify(&self, message: &str);
}
