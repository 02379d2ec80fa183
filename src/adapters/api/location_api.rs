//! Implements LocationPort against the location endpoint (`{"location": {...}}`).

use crate::domain::{DomainError, Location};
use crate::ports::LocationPort;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct LocationResponse {
    #[serde(default)]
    location: Location,
}

pub struct HttpLocationApi {
    client: Client,
    url: String,
}

impl HttpLocationApi {
    pub fn new(url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Location(format!("build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl LocationPort for HttpLocationApi {
    async fn get_location(&self) -> Result<Location, DomainError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Location(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(DomainError::Location(format!(
                "location API error {}",
                res.status()
            )));
        }

        let body: LocationResponse = res
            .json()
            .await
            .map_err(|e| DomainError::Location(format!("Failed to parse response: {}", e)))?;
        Ok(body.location)
    }
}
