use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review lifecycle states for a solution pitch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PitchStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl Default for PitchStatus {
    fn default() -> Self {
        PitchStatus::Draft
    }
}

impl fmt::Display for PitchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PitchStatus::Draft => write!(f, "Draft"),
            PitchStatus::Submitted => write!(f, "Submitted"),
            PitchStatus::Approved => write!(f, "Approved"),
            PitchStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A customer's structured project request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBrief {
    pub id: String,
    pub title: String,
    pub industry: String,
    /// Free-text range, e.g. "$50,000 - $100,000"
    pub budget: String,
    pub objectives: String,
    /// Free-text range, e.g. "3-4 months"
    pub timeline: String,
    #[serde(rename = "clientDetails")]
    pub client_details: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for submitting a new project brief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefCreateInput {
    pub title: String,
    pub industry: String,
    pub budget: String,
    pub objectives: String,
    pub timeline: String,
    #[serde(rename = "clientDetails")]
    pub client_details: String,
}

/// Input for updating an existing project brief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefUpdateInput {
    pub title: Option<String>,
    pub industry: Option<String>,
    pub budget: Option<String>,
    pub objectives: Option<String>,
    pub timeline: Option<String>,
    #[serde(rename = "clientDetails")]
    pub client_details: Option<String>,
}

/// A record of a previously completed engagement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub description: String,
    pub tags: Vec<String>,
    pub outcome: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    /// Stale display cache of the last scoring run. Always recomputed per
    /// brief; never trusted across briefs.
    #[serde(rename = "relevanceScore")]
    pub relevance_score: Option<u8>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for adding a case study to the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudyCreateInput {
    pub title: String,
    pub industry: String,
    pub description: String,
    pub tags: Option<Vec<String>>,
    pub outcome: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

/// Input for updating an existing case study
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudyUpdateInput {
    pub title: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub outcome: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

/// A case study paired with a freshly computed relevance score for one
/// specific brief. Ephemeral: created per scoring request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCaseStudy {
    #[serde(rename = "caseStudy")]
    pub case_study: CaseStudy,
    #[serde(rename = "relevanceScore")]
    pub relevance_score: u8,
}

/// A composed proposal document plus its review lifecycle metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionPitch {
    pub id: String,
    #[serde(rename = "briefId")]
    pub brief_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub status: PitchStatus,
    /// Case studies cited at composition time, in rank order. Frozen: edits
    /// never re-run scoring or re-select studies.
    #[serde(rename = "caseStudyIds")]
    pub case_study_ids: Vec<String>,
    pub version: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for a manual edit of a pitch's title or content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PitchEditInput {
    pub title: Option<String>,
    pub content: Option<String>,
}
