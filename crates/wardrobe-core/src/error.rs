//! Error types for the wardrobe optimizer

use thiserror::Error;

use crate::score::HardSoftScore;

/// Main error type for wardrobe operations
#[derive(Debug, Error)]
pub enum WardrobeError {
    /// Error in solver configuration or run parameters
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog item failed boundary validation
    #[error("Invalid item '{item_id}': {reason}")]
    Validation { item_id: String, reason: String },

    /// Incremental score drifted from a full recompute
    #[error("Score corruption: incremental score {incremental} != recomputed score {recomputed}")]
    ScoreCorruption {
        incremental: HardSoftScore,
        recomputed: HardSoftScore,
    },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WardrobeError {
    pub fn validation(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        WardrobeError::Validation {
            item_id: item_id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for wardrobe operations
pub type Result<T> = std::result::Result<T, WardrobeError>;
