//! Recording doubles for platform ports, shared by use-case tests.

use crate::domain::{DomainError, ShareError};
use crate::ports::{ClipboardPort, NotifierPort, SharePort, ShareRequest};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Clipboard("no display".into()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Share sheet that answers every request with a fixed result.
pub struct StubShare {
    pub result: Result<(), ShareError>,
    pub requests: Mutex<Vec<ShareRequest>>,
}

impl StubShare {
    pub fn new(result: Result<(), ShareError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SharePort for StubShare {
    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}
