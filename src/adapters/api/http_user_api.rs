//! REST adapter for the user API. Implements UserApiPort over reqwest.
//!
//! Bearer token is optional: profile calls need one, registration does not.

use crate::domain::{DomainError, NewUserPayload, PreferenceSet, RecentlyViewed, User, UserProfile};
use crate::ports::UserApiPort;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// User API client rooted at `base_url` (e.g. "http://localhost:8000/api").
pub struct HttpUserApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpUserApi {
    pub fn new(
        base_url: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Api(format!("build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, DomainError> {
        let response = self
            .authorized(req)
            .send()
            .await
            .map_err(|e| DomainError::Api(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "user API returned error");
            return Err(DomainError::Api(format!(
                "API error {}: {}",
                status,
                error_detail(&text)
            )));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        response
            .json()
            .await
            .map_err(|e| DomainError::Api(format!("Failed to parse API response: {}", e)))
    }
}

/// Prefer the service's `detail`/`message` field; fall back to a truncated body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["detail", "message", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|d| d.as_str()).map(String::from))
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

/// User echoed back by the service, or one built from what was submitted.
fn registered_user(body: &str, payload: &NewUserPayload) -> User {
    match serde_json::from_str::<User>(body) {
        Ok(user) => user,
        Err(e) => {
            debug!(error = %e, "register response carries no user, using submitted fields");
            User::from(payload)
        }
    }
}

#[async_trait::async_trait]
impl UserApiPort for HttpUserApi {
    async fn get_profile(&self) -> Result<UserProfile, DomainError> {
        let profile: UserProfile = self.get_json("/user/profile").await?;
        debug!(
            bookmarks = profile.bookmarks.len(),
            has_preferences = profile.preferences.is_some(),
            "fetched profile"
        );
        Ok(profile)
    }

    async fn get_recently_viewed(&self) -> Result<RecentlyViewed, DomainError> {
        self.get_json("/user/recently-viewed").await
    }

    async fn update_preferences(&self, preferences: &PreferenceSet) -> Result<(), DomainError> {
        let req = self
            .client
            .put(self.url("/user/preferences"))
            .json(preferences);
        self.send(req).await?;
        Ok(())
    }

    /// Any 2xx means the account exists, whatever the body carries.
    async fn register(&self, payload: &NewUserPayload) -> Result<User, DomainError> {
        let req = self.client.post(self.url("/auth/register")).json(payload);
        let response = self.send(req).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(registered_user(&body, payload))
    }
}
