//! Reference properties fetched over HTTP using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::NoteSource;

/// HTTP client for reference properties hosted under a base URL.
#[derive(Debug, Clone)]
pub struct HttpNoteSource {
    base_url: Url,
    client: Client,
}

impl HttpNoteSource {
    /// Create a client for `base_url`, which must end with `/`.
    pub fn new(base_url: Url, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    fn fetch_error(&self, url: &Url, details: impl Into<String>) -> AppError {
        AppError::NoteFetch { location: url.to_string(), details: details.into() }
    }
}

impl NoteSource for HttpNoteSource {
    fn fetch(&self, file: &str) -> Result<Option<String>, AppError> {
        let url = self
            .base_url
            .join(file)
            .map_err(|e| self.fetch_error(&self.base_url, format!("invalid file '{}': {}", file, e)))?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(self.fetch_error(
                &self.base_url,
                format!("file '{}' resolves outside the reference location", file),
            ));
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| self.fetch_error(&url, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(self.fetch_error(&url, format!("unexpected status {}", status.as_u16())));
        }

        let body = response
            .text()
            .map_err(|e| self.fetch_error(&url, format!("failed to read body: {}", e)))?;
        Ok(Some(body))
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}
