use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Webhook URLs carry tokens, so the error names the endpoint by its
    /// position in the configured list rather than by URL.
    #[error("webhook endpoint {endpoint} returned status {status}")]
    Delivery { endpoint: usize, status: u16 },
}
