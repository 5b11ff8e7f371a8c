//! Normalized review model and per-source payload mapping.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ReviewError;
use crate::store::SeenStore;

/// Texts at or below this many chars carry too little signal to estimate.
const ESTIMATE_MIN_CHARS: usize = 3;

/// Where a review came from. Determines display label, dedup key prefix,
/// and Slack emoticon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSource {
    Trustpilot,
    FacebookRating,
    FacebookComment,
    Tweet,
}

impl ReviewSource {
    /// Human-readable label used in Slack messages and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trustpilot => "Trustpilot review",
            Self::FacebookRating => "Facebook review",
            Self::FacebookComment => "Facebook comment",
            Self::Tweet => "tweet",
        }
    }

    /// Stable identifier used as the dedup key prefix. Never change these
    /// for an existing deployment or every old review looks new again.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Trustpilot => "trustpilot",
            Self::FacebookRating => "facebook_rating",
            Self::FacebookComment => "facebook_comment",
            Self::Tweet => "tweet",
        }
    }

    /// Slack emoticon shortcode for this source.
    #[must_use]
    pub const fn emoticon(self) -> &'static str {
        match self {
            Self::Trustpilot => ":trustpilot:",
            Self::FacebookRating | Self::FacebookComment => ":facebook:",
            Self::Tweet => ":twitter:",
        }
    }
}

/// A review normalized from any supported source.
#[derive(Debug, Clone)]
pub struct Review {
    pub source: ReviewSource,
    pub id: String,
    pub text: String,
    /// Star rating in 1..=5. `None` when the source carries no explicit
    /// rating; the pipeline may fill it in via sentiment estimation.
    pub rating: Option<u8>,
    pub author: String,
    /// Link back to the review on the source platform.
    pub url: String,
    /// Whether the dedup store had no record of this review at construction
    /// time. Construction never writes the store.
    pub is_new: bool,
}

impl Review {
    /// Build a review from a raw Trustpilot API payload.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Payload`] if required fields are missing or
    /// mistyped, or [`ReviewError::Store`] if the membership check fails.
    pub async fn from_trustpilot(
        payload: serde_json::Value,
        store: &dyn SeenStore,
    ) -> Result<Self, ReviewError> {
        let source = ReviewSource::Trustpilot;
        let raw: TrustpilotPayload = parse(source.label(), payload)?;
        let url = format!(
            "https://www.trustpilot.com/review/{}/{}",
            raw.business_unit.identifying_name, raw.id
        );

        Self::screened(
            source,
            raw.id,
            raw.text,
            Some(raw.stars),
            raw.consumer.display_name,
            url,
            store,
        )
        .await
    }

    /// Build a review from a Facebook page rating payload.
    ///
    /// Ratings arrive anonymized, so the author is always a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Payload`] if required fields are missing or
    /// mistyped, or [`ReviewError::Store`] if the membership check fails.
    pub async fn from_facebook_rating(
        payload: serde_json::Value,
        store: &dyn SeenStore,
    ) -> Result<Self, ReviewError> {
        let source = ReviewSource::FacebookRating;
        let raw: FacebookRatingPayload = parse(source.label(), payload)?;
        let url = format!("https://www.facebook.com/{}", raw.open_graph_story.id);

        Self::screened(
            source,
            raw.open_graph_story.id,
            raw.review_text,
            Some(raw.rating),
            "_an unknown reviewer_".to_string(),
            url,
            store,
        )
        .await
    }

    /// Build a review from a Facebook page comment payload.
    ///
    /// Comments carry no star rating. The author is the commenter's Graph
    /// API id when present, otherwise a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Payload`] if required fields are missing or
    /// mistyped, or [`ReviewError::Store`] if the membership check fails.
    pub async fn from_facebook_comment(
        payload: serde_json::Value,
        store: &dyn SeenStore,
    ) -> Result<Self, ReviewError> {
        let source = ReviewSource::FacebookComment;
        let raw: FacebookCommentPayload = parse(source.label(), payload)?;
        let author = raw
            .from
            .map_or_else(|| "_an unknown commenter_".to_string(), |f| f.id);

        Self::screened(
            source,
            raw.id,
            raw.message,
            None,
            author,
            raw.permalink_url,
            store,
        )
        .await
    }

    /// Build a review from a Twitter status payload.
    ///
    /// `marker` is an optional emoticon attached upstream: `:(` maps to a
    /// 1-star rating, `:)` to 5 stars, anything else leaves the rating
    /// unset for estimation.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Payload`] if required fields are missing or
    /// mistyped, or [`ReviewError::Store`] if the membership check fails.
    pub async fn from_tweet(
        payload: serde_json::Value,
        marker: Option<&str>,
        store: &dyn SeenStore,
    ) -> Result<Self, ReviewError> {
        let source = ReviewSource::Tweet;
        let raw: TweetPayload = parse(source.label(), payload)?;
        let url = format!(
            "https://www.twitter.com/{}/status/{}",
            raw.user.screen_name, raw.id
        );

        Self::screened(
            source,
            raw.id.to_string(),
            raw.text,
            marker_rating(marker),
            raw.user.name,
            url,
            store,
        )
        .await
    }

    /// Key identifying this review in the dedup store: `{slug}:{id}`.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{}:{}", self.source.slug(), self.id)
    }

    /// Whether the pipeline should try to estimate a rating: no explicit
    /// rating and enough text to work with.
    #[must_use]
    pub fn wants_estimate(&self) -> bool {
        self.rating.is_none() && self.text.chars().count() > ESTIMATE_MIN_CHARS
    }

    async fn screened(
        source: ReviewSource,
        id: String,
        text: String,
        rating: Option<u8>,
        author: String,
        url: String,
        store: &dyn SeenStore,
    ) -> Result<Self, ReviewError> {
        let mut review = Self {
            source,
            id,
            text,
            rating,
            author,
            url,
            is_new: false,
        };
        review.is_new = !store.is_member(&review.dedup_key()).await?;
        Ok(review)
    }
}

fn marker_rating(marker: Option<&str>) -> Option<u8> {
    match marker {
        Some(":(") => Some(1),
        Some(":)") => Some(5),
        _ => None,
    }
}

fn parse<T: DeserializeOwned>(
    label: &'static str,
    payload: serde_json::Value,
) -> Result<T, ReviewError> {
    serde_json::from_value(payload).map_err(|source| ReviewError::Payload { label, source })
}

// ---------------------------------------------------------------------------
// Raw payload shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TrustpilotPayload {
    id: String,
    text: String,
    stars: u8,
    consumer: TrustpilotConsumer,
    #[serde(rename = "businessUnit")]
    business_unit: TrustpilotBusinessUnit,
}

#[derive(Debug, Deserialize)]
struct TrustpilotConsumer {
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct TrustpilotBusinessUnit {
    #[serde(rename = "identifyingName")]
    identifying_name: String,
}

#[derive(Debug, Deserialize)]
struct FacebookRatingPayload {
    open_graph_story: FacebookStory,
    #[serde(default)]
    review_text: String,
    rating: u8,
}

#[derive(Debug, Deserialize)]
struct FacebookStory {
    id: String,
}

#[derive(Debug, Deserialize)]
struct FacebookCommentPayload {
    id: String,
    message: String,
    from: Option<FacebookActor>,
    permalink_url: String,
}

#[derive(Debug, Deserialize)]
struct FacebookActor {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TweetPayload {
    id: u64,
    text: String,
    user: TweetUser,
}

#[derive(Debug, Deserialize)]
struct TweetUser {
    name: String,
    screen_name: String,
}
