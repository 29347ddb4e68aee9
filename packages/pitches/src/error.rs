// ABOUTME: Error types for the pitches package
// ABOUTME: Defines all error variants for composition and workflow operations

use thiserror::Error;

use crate::lifecycle::PitchAction;
use pitchline_core::types::PitchStatus;
use pitchline_core::validation::ValidationError;
use pitchline_storage::StorageError;

#[derive(Error, Debug)]
pub enum PitchError {
    #[error("Brief not found: {0}")]
    BriefNotFound(String),

    #[error("Pitch not found: {0}")]
    PitchNotFound(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),

    #[error("Illegal status transition: cannot {action} a pitch in {from} status")]
    InvalidTransition {
        from: PitchStatus,
        action: PitchAction,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, PitchError>;
