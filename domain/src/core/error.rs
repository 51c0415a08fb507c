//! Domain error types

use crate::pool::batch::{BATCH_MAX, BATCH_MIN};
use thiserror::Error;

/// Rejected user input
///
/// Each variant renders as the status message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a non-empty name.")]
    EmptyName,

    #[error("Name already exists in the pool: {0}")]
    Duplicate(String),

    #[error(
        "Please enter between {} and {} names (after splitting by comma or newline), got {count}.",
        BATCH_MIN,
        BATCH_MAX
    )]
    BatchSize { count: usize },

    #[error("No new names to add (all duplicates).")]
    AllDuplicates,

    #[error(
        "After removing duplicates, only {remaining} new name(s) remain; at least {} are required.",
        BATCH_MIN
    )]
    InsufficientUnique { remaining: usize },
}

/// Errors raised by pool operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No names to pick. Add some names first.")]
    EmptyPool,

    #[error("No name at position {index} (pool has {len}).")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A draw is in progress. Wait for the winner.")]
    DrawInProgress,

    #[error("No draw is waiting to be finalized.")]
    NotDrawing,
}

impl PoolError {
    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, PoolError::Validation(_))
    }
}
