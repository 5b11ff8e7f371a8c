//! Structured Slack message building.

use serde::Serialize;

use starfeed_reviews::Review;

/// Body posted to a Slack incoming webhook.
#[derive(Debug, Serialize)]
pub struct Message {
    pub username: String,
    pub attachments: Vec<MessageAttachment>,
}

#[derive(Debug, Serialize)]
pub struct MessageAttachment {
    /// Plain-text rendering for clients that cannot show attachments.
    pub fallback: String,
    /// One-line summary shown above the attachment.
    pub pretext: String,
    /// The review text itself.
    pub text: String,
    /// Attachment side bar color. Omitted entirely when no color applies;
    /// Slack then falls back to its default rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    pub title: String,
    pub title_link: String,
    pub fields: Vec<MessageField>,
}

#[derive(Debug, Serialize)]
pub struct MessageField {
    pub title: &'static str,
    pub value: String,
    pub short: bool,
}

/// Map a star rating to a Slack attachment color.
///
/// 1 star is `danger`, 2 or 3 `warning`, 5 `good`. Anything else, including
/// an absent rating, gets no color.
#[must_use]
pub const fn rating_color(rating: Option<u8>) -> Option<&'static str> {
    match rating {
        Some(1) => Some("danger"),
        Some(2 | 3) => Some("warning"),
        Some(5) => Some("good"),
        _ => None,
    }
}

impl Message {
    /// Render a review as a Slack attachment message.
    ///
    /// The summary line reads `New {type} by {author}:`, optionally prefixed
    /// with the source emoticon. The fallback carries the summary plus the
    /// quoted review text for clients without attachment support.
    #[must_use]
    pub fn for_review(review: &Review, username: &str, use_emoticons: bool) -> Self {
        let mut summary = format!("New {} by {}:", review.source.label(), review.author);
        if use_emoticons {
            summary = format!("{} {}", review.source.emoticon(), summary);
        }
        let fallback = format!("{summary}\n\n>>>{}", review.text);

        let rating_value = review
            .rating
            .map_or_else(|| "?".to_string(), |r| r.to_string());

        Self {
            username: username.to_string(),
            attachments: vec![MessageAttachment {
                fallback,
                pretext: summary,
                text: review.text.clone(),
                color: rating_color(review.rating),
                title: format!("{} #{}", review.source.label(), review.id),
                title_link: review.url.clone(),
                fields: vec![
                    MessageField {
                        title: "Author",
                        value: review.author.clone(),
                        short: true,
                    },
                    MessageField {
                        title: "Rating",
                        value: rating_value,
                        short: true,
                    },
                ],
            }],
        }
    }
}
