//! Slack webhook delivery for starfeed.
//!
//! Renders a [`starfeed_reviews::Review`] into a Slack attachment message
//! and posts it to each configured incoming-webhook URL in sequence.

pub mod error;
pub mod message;
pub mod notifier;

pub use error::SlackError;
pub use message::{rating_color, Message, MessageAttachment, MessageField};
pub use notifier::WebhookNotifier;
