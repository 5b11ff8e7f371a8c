//! Rating estimation from review text.

use crate::error::SentimentError;
use crate::language::DetectClient;
use crate::polarity::{polarity, rating_from_polarity};

/// Estimates star ratings for reviews that arrive without one.
///
/// Estimation only applies to English text, so the estimator first asks the
/// configured detection endpoint for the language. With no endpoint
/// configured every estimate is `None` and reviews go out unrated.
pub struct Estimator {
    detector: Option<DetectClient>,
}

impl Estimator {
    /// Create an estimator, optionally backed by a detection endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn new(detect_url: Option<&str>, timeout_secs: u64) -> Result<Self, SentimentError> {
        let detector = match detect_url {
            Some(url) => Some(DetectClient::new(url, timeout_secs)?),
            None => None,
        };
        Ok(Self { detector })
    }

    /// Estimate a 1-5 star rating for `text`.
    ///
    /// Returns `None` when no detection endpoint is configured, the text is
    /// not English, or detection fails. Detection failures are logged and
    /// swallowed so one flaky endpoint call never blocks a notification.
    pub async fn estimate(&self, text: &str) -> Option<u8> {
        let Some(detector) = &self.detector else {
            tracing::trace!("no detection endpoint configured, skipping estimate");
            return None;
        };

        match detector.detect(text).await {
            Ok(language) if language == "en" => Some(rating_from_polarity(polarity(text))),
            Ok(language) => {
                tracing::debug!(language = %language, "skipping estimate for non-English text");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "language detection failed, skipping estimate");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn detect_server(language: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"confidence": 90.0, "language": language}
            ])))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn english_text_gets_a_rating() {
        let server = detect_server("en").await;
        let estimator = Estimator::new(Some(&server.uri()), 5).unwrap();

        let rating = estimator.estimate("great service, would recommend").await;

        assert_eq!(rating, Some(5));
    }

    #[tokio::test]
    async fn neutral_english_text_gets_three_stars() {
        let server = detect_server("en").await;
        let estimator = Estimator::new(Some(&server.uri()), 5).unwrap();

        let rating = estimator.estimate("the package arrived on a tuesday").await;

        assert_eq!(rating, Some(3));
    }

    #[tokio::test]
    async fn negative_english_text_gets_one_star() {
        let server = detect_server("en").await;
        let estimator = Estimator::new(Some(&server.uri()), 5).unwrap();

        let rating = estimator.estimate("terrible scam, avoid").await;

        assert_eq!(rating, Some(1));
    }

    #[tokio::test]
    async fn non_english_text_is_skipped() {
        let server = detect_server("fr").await;
        let estimator = Estimator::new(Some(&server.uri()), 5).unwrap();

        let rating = estimator.estimate("c'est magnifique").await;

        assert_eq!(rating, None);
    }

    #[tokio::test]
    async fn detection_failure_yields_no_estimate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let estimator = Estimator::new(Some(&server.uri()), 5).unwrap();
        let rating = estimator.estimate("great stuff").await;

        assert_eq!(rating, None);
    }

    #[tokio::test]
    async fn no_endpoint_means_no_estimate() {
        let estimator = Estimator::new(None, 5).unwrap();

        let rating = estimator.estimate("great service, would recommend").await;

        assert_eq!(rating, None);
    }
}
