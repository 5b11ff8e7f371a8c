use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("malformed {label} payload: {source}")]
    Payload {
        label: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("seen store error: {0}")]
    Store(#[from] StoreError),
}
