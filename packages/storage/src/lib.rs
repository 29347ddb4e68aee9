// ABOUTME: Record store abstraction for Pitchline
// ABOUTME: Async store traits the surrounding system injects, plus the bundled in-memory provider

use async_trait::async_trait;
use thiserror::Error;

use pitchline_core::types::{
    BriefCreateInput, BriefUpdateInput, CaseStudy, CaseStudyCreateInput, CaseStudyUpdateInput,
    ProjectBrief, SolutionPitch,
};

pub mod memory;

pub use memory::MemoryStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Store for customer project briefs
#[async_trait]
pub trait BriefStore: Send + Sync {
    async fn create_brief(&self, input: BriefCreateInput) -> StorageResult<ProjectBrief>;
    async fn get_brief(&self, id: &str) -> StorageResult<Option<ProjectBrief>>;
    async fn list_briefs(&self) -> StorageResult<Vec<ProjectBrief>>;
    async fn update_brief(&self, id: &str, input: BriefUpdateInput) -> StorageResult<ProjectBrief>;
    async fn delete_brief(&self, id: &str) -> StorageResult<()>;
}

/// Store for the case study library
#[async_trait]
pub trait CaseStudyStore: Send + Sync {
    async fn create_case_study(&self, input: CaseStudyCreateInput) -> StorageResult<CaseStudy>;
    async fn get_case_study(&self, id: &str) -> StorageResult<Option<CaseStudy>>;
    async fn list_case_studies(&self) -> StorageResult<Vec<CaseStudy>>;
    async fn list_case_studies_with_filter(
        &self,
        filter: CaseStudyFilter,
    ) -> StorageResult<Vec<CaseStudy>>;
    async fn update_case_study(
        &self,
        id: &str,
        input: CaseStudyUpdateInput,
    ) -> StorageResult<CaseStudy>;
    async fn delete_case_study(&self, id: &str) -> StorageResult<()>;
}

/// Store for composed solution pitches.
///
/// Pitches arrive whole from the composer, so the surface is the plain
/// get/list/save shape rather than create/update inputs.
#[async_trait]
pub trait PitchStore: Send + Sync {
    /// Insert or replace by id.
    async fn save_pitch(&self, pitch: SolutionPitch) -> StorageResult<SolutionPitch>;
    async fn get_pitch(&self, id: &str) -> StorageResult<Option<SolutionPitch>>;
    async fn list_pitches(&self) -> StorageResult<Vec<SolutionPitch>>;
    async fn list_pitches_for_brief(&self, brief_id: &str) -> StorageResult<Vec<SolutionPitch>>;
    async fn delete_pitch(&self, id: &str) -> StorageResult<()>;
}

/// Filter for querying the case study library
#[derive(Debug, Clone, Default)]
pub struct CaseStudyFilter {
    /// Case-insensitive industry equality
    pub industry: Option<String>,
    /// Study must carry every requested tag (case-insensitive)
    pub tags: Option<Vec<String>>,
    /// Case-insensitive substring over title, description, and outcome
    pub search: Option<String>,
    pub limit: Option<usize>,
}
