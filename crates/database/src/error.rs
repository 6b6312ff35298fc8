use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load connection settings for the document store: {0}")]
    ConnectionConfig(String),

    #[error("Transport failure while talking to the document store: {0}")]
    Transport(#[from] mongodb::error::Error),

    #[error("The operation exceeded its {limit:?} bound")]
    Timeout { limit: Duration },

    #[error("Profile validation failed: {0}")]
    Validation(String),

    #[error("No profile matches the requested identifier.")]
    NotFound,
}
