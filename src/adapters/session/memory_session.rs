//! Implements SessionPort: in-memory current user, registration via the user API.

use crate::domain::{DomainError, NewUserPayload, User, UserPatch};
use crate::ports::{SessionPort, UserApiPort};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Auth session for one process. Not persisted; logout drops the user.
pub struct MemorySession {
    api: Arc<dyn UserApiPort>,
    user: RwLock<Option<User>>,
}

impl MemorySession {
    pub fn new(api: Arc<dyn UserApiPort>, user: Option<User>) -> Self {
        Self {
            api,
            user: RwLock::new(user),
        }
    }
}

#[async_trait::async_trait]
impl SessionPort for MemorySession {
    async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    async fn logout(&self) {
        if let Some(user) = self.user.write().await.take() {
            info!(user = %user.display_name(), "logged out");
        }
    }

    async fn update_user(&self, patch: UserPatch) {
        if let Some(user) = self.user.write().await.as_mut() {
            user.apply(patch);
        }
    }

    async fn register(&self, payload: NewUserPayload) -> Result<User, DomainError> {
        let user = self.api.register(&payload).await?;
        *self.user.write().await = Some(user.clone());
        info!(user = %user.display_name(), "signed in after registration");
        Ok(user)
    }
}
