//! Shared application configuration for starfeed.
//!
//! Everything the pipeline needs at process start is loaded once from the
//! environment into an [`AppConfig`]. Nothing else reads environment
//! variables after boot.

use thiserror::Error;

mod app_config;
mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
