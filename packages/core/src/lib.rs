// ABOUTME: Core types, validation, and utilities for Pitchline
// ABOUTME: Foundational package providing shared record types across all Pitchline packages

pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    BriefCreateInput, BriefUpdateInput, CaseStudy, CaseStudyCreateInput, CaseStudyUpdateInput,
    PitchEditInput, PitchStatus, ProjectBrief, ScoredCaseStudy, SolutionPitch,
};

// Re-export constants
pub use constants::{INCLUSION_THRESHOLD, MAX_CITED_STUDIES, RECORD_ID_LENGTH};

// Re-export utilities
pub use utils::generate_record_id;

// Re-export validation
pub use validation::{
    validate_brief_data, validate_brief_update, validate_case_study_data,
    validate_case_study_update, ValidationError,
};
