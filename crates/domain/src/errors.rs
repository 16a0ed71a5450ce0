//! Error types used throughout the scheduling engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Slotwise
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SlotwiseError {
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Availability generation failed: {0}")]
    AvailabilityGenerationFailed(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for Slotwise operations
pub type Result<T> = std::result::Result<T, SlotwiseError>;
