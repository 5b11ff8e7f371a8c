//! Sequential webhook delivery.

use std::time::Duration;

use reqwest::Client;

use starfeed_reviews::Review;

use crate::error::SlackError;
use crate::message::Message;

/// Posts review notifications to a list of Slack incoming webhooks.
///
/// Delivery is sequential and stops at the first failure, so a failed
/// endpoint leaves later endpoints unnotified for this run. Callers must
/// not mark the review seen when delivery fails.
pub struct WebhookNotifier {
    client: Client,
    webhook_urls: Vec<String>,
    username: String,
    use_emoticons: bool,
}

impl WebhookNotifier {
    /// Create a notifier for the given webhook URLs.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        webhook_urls: Vec<String>,
        username: &str,
        use_emoticons: bool,
        timeout_secs: u64,
    ) -> Result<Self, SlackError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("starfeed/0.1 (review-notifier)")
            .build()?;

        Ok(Self {
            client,
            webhook_urls,
            username: username.to_string(),
            use_emoticons,
        })
    }

    /// Render `review` without sending it. Used for dry runs.
    #[must_use]
    pub fn render(&self, review: &Review) -> Message {
        Message::for_review(review, &self.username, self.use_emoticons)
    }

    /// Render and deliver `review` to every configured webhook in order.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Http`] on network failure and
    /// [`SlackError::Delivery`] on a non-2xx response. Either way, webhooks
    /// after the failing one are skipped.
    pub async fn notify(&self, review: &Review) -> Result<(), SlackError> {
        let message = self.render(review);
        self.deliver(&message).await
    }

    async fn deliver(&self, message: &Message) -> Result<(), SlackError> {
        for (endpoint, url) in self.webhook_urls.iter().enumerate() {
            let response = self.client.post(url).json(message).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SlackError::Delivery {
                    endpoint,
                    status: status.as_u16(),
                });
            }
            tracing::debug!(endpoint, "notification delivered");
        }
        Ok(())
    }
}
