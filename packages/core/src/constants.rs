/// Minimum relevance score a case study must reach to be cited in a pitch
pub const INCLUSION_THRESHOLD: u8 = 60;

/// Maximum number of case studies cited in a composed pitch
pub const MAX_CITED_STUDIES: usize = 2;

/// Length of generated record IDs (8-character format for cloud compatibility)
pub const RECORD_ID_LENGTH: usize = 8;
