//! Sentiment estimation for starfeed.
//!
//! Turns unrated review text into a 1-5 star estimate. The language comes
//! from an external detection endpoint; English text is scored with a
//! lexicon polarity in `[-1.0, 1.0]` and folded onto the star scale.
//! Non-English text and detection failures yield no estimate.

pub mod error;
pub mod estimator;
pub mod polarity;

mod language;

pub use error::SentimentError;
pub use estimator::Estimator;
pub use polarity::{polarity, rating_from_polarity};
