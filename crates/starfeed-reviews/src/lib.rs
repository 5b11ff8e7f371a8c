//! Review model for starfeed.
//!
//! Normalizes raw payloads from Trustpilot, Facebook, and Twitter into a single
//! [`Review`] type, and defines the [`SeenStore`] trait the pipeline uses to
//! separate fresh reviews from ones it has already delivered.

pub mod error;
pub mod model;
pub mod store;

pub use error::ReviewError;
pub use model::{Review, ReviewSource};
pub use store::{SeenStore, StoreError};
