//! Native share capability for terminals: there is none.
//!
//! Always answers `Unsupported`, which sends the article view down the clipboard path.

use crate::domain::ShareError;
use crate::ports::{SharePort, ShareRequest};
use tracing::debug;

#[derive(Debug, Default)]
pub struct TerminalShare;

#[async_trait::async_trait]
impl SharePort for TerminalShare {
    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        debug!(url = %request.url, "no share sheet in terminal");
        Err(ShareError::Unsupported)
    }
}
