//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the application views.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the main menu until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
