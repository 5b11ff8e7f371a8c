//! Client for a LibreTranslate-style language detection endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// HTTP client for `POST {base}/detect`.
pub(crate) struct DetectClient {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct DetectCandidate {
    language: String,
}

impl DetectClient {
    /// Create a new `DetectClient` for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub(crate) fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("starfeed/0.1 (review-notifier)")
            .build()?;

        Ok(Self {
            client,
            url: format!("{}/detect", base_url.trim_end_matches('/')),
        })
    }

    /// Detect the language of `text`, returning an ISO 639-1 code.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on network failure and
    /// [`SentimentError::Detect`] on a non-2xx status or an empty
    /// candidate list.
    pub(crate) async fn detect(&self, text: &str) -> Result<String, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&DetectRequest { q: text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SentimentError::Detect(format!(
                "detection endpoint returned status {}",
                response.status()
            )));
        }

        let mut candidates: Vec<DetectCandidate> = response.json().await?;
        if candidates.is_empty() {
            return Err(SentimentError::Detect(
                "detection endpoint returned no candidates".to_string(),
            ));
        }

        // Candidates arrive ordered by confidence, highest first.
        Ok(candidates.remove(0).language)
    }
}
