use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PitchError, Result};
use pitchline_core::types::PitchStatus;

/// Operator-driven actions on a pitch's review lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PitchAction {
    /// Team member sends the draft for review
    Submit,
    /// Manager accepts a submitted pitch
    Approve,
    /// Manager declines a submitted pitch
    Reject,
    /// Reopen an approved or rejected pitch for editing
    Revise,
}

impl fmt::Display for PitchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PitchAction::Submit => write!(f, "submit"),
            PitchAction::Approve => write!(f, "approve"),
            PitchAction::Reject => write!(f, "reject"),
            PitchAction::Revise => write!(f, "revise"),
        }
    }
}

/// Apply an action to a status, returning the next status.
///
/// The transition table:
///   draft --submit--> submitted
///   submitted --approve--> approved
///   submitted --reject--> rejected
///   approved/rejected --revise--> draft
///
/// Every other (status, action) pair is rejected.
pub fn transition(from: PitchStatus, action: PitchAction) -> Result<PitchStatus> {
    match (from, action) {
        (PitchStatus::Draft, PitchAction::Submit) => Ok(PitchStatus::Submitted),
        (PitchStatus::Submitted, PitchAction::Approve) => Ok(PitchStatus::Approved),
        (PitchStatus::Submitted, PitchAction::Reject) => Ok(PitchStatus::Rejected),
        (PitchStatus::Approved, PitchAction::Revise)
        | (PitchStatus::Rejected, PitchAction::Revise) => Ok(PitchStatus::Draft),
        (from, action) => Err(PitchError::InvalidTransition { from, action }),
    }
}
