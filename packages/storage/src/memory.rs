// ABOUTME: In-memory record store provider
// ABOUTME: Insertion-ordered, lock-guarded lists behind the async store traits

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use pitchline_core::types::{
    BriefCreateInput, BriefUpdateInput, CaseStudy, CaseStudyCreateInput, CaseStudyUpdateInput,
    ProjectBrief, SolutionPitch,
};
use pitchline_core::utils::generate_record_id;

use crate::{
    BriefStore, CaseStudyFilter, CaseStudyStore, PitchStore, StorageError, StorageResult,
};

/// In-memory provider implementing all three store traits.
///
/// Records are kept in insertion order; `list_*` returns that order, which
/// is what makes the ranker's stable tie-break meaningful end-to-end.
#[derive(Default)]
pub struct MemoryStore {
    briefs: RwLock<Vec<ProjectBrief>>,
    case_studies: RwLock<Vec<CaseStudy>>,
    pitches: RwLock<Vec<SolutionPitch>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BriefStore for MemoryStore {
    async fn create_brief(&self, input: BriefCreateInput) -> StorageResult<ProjectBrief> {
        let mut briefs = self.briefs.write().await;

        if briefs.iter().any(|b| b.title == input.title) {
            return Err(StorageError::DuplicateTitle(input.title));
        }

        let now = Utc::now();
        let brief = ProjectBrief {
            id: generate_record_id(),
            title: input.title,
            industry: input.industry,
            budget: input.budget,
            objectives: input.objectives,
            timeline: input.timeline,
            client_details: input.client_details,
            created_at: now,
            updated_at: now,
        };

        briefs.push(brief.clone());
        info!("Stored brief '{}' with ID {}", brief.title, brief.id);
        Ok(brief)
    }

    async fn get_brief(&self, id: &str) -> StorageResult<Option<ProjectBrief>> {
        let briefs = self.briefs.read().await;
        Ok(briefs.iter().find(|b| b.id == id).cloned())
    }

    async fn list_briefs(&self) -> StorageResult<Vec<ProjectBrief>> {
        Ok(self.briefs.read().await.clone())
    }

    async fn update_brief(&self, id: &str, input: BriefUpdateInput) -> StorageResult<ProjectBrief> {
        let mut briefs = self.briefs.write().await;

        if let Some(ref title) = input.title {
            if briefs.iter().any(|b| b.id != id && b.title == *title) {
                return Err(StorageError::DuplicateTitle(title.clone()));
            }
        }

        let brief = briefs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        if let Some(title) = input.title {
            brief.title = title;
        }
        if let Some(industry) = input.industry {
            brief.industry = industry;
        }
        if let Some(budget) = input.budget {
            brief.budget = budget;
        }
        if let Some(objectives) = input.objectives {
            brief.objectives = objectives;
        }
        if let Some(timeline) = input.timeline {
            brief.timeline = timeline;
        }
        if let Some(client_details) = input.client_details {
            brief.client_details = client_details;
        }
        brief.updated_at = Utc::now();

        Ok(brief.clone())
    }

    async fn delete_brief(&self, id: &str) -> StorageResult<()> {
        let mut briefs = self.briefs.write().await;
        let before = briefs.len();
        briefs.retain(|b| b.id != id);

        if briefs.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CaseStudyStore for MemoryStore {
    async fn create_case_study(&self, input: CaseStudyCreateInput) -> StorageResult<CaseStudy> {
        let mut studies = self.case_studies.write().await;

        if studies.iter().any(|s| s.title == input.title) {
            return Err(StorageError::DuplicateTitle(input.title));
        }

        let now = Utc::now();
        let study = CaseStudy {
            id: generate_record_id(),
            title: input.title,
            industry: input.industry,
            description: input.description,
            tags: input.tags.unwrap_or_default(),
            outcome: input.outcome,
            budget: input.budget,
            timeline: input.timeline,
            relevance_score: None,
            created_at: now,
            updated_at: now,
        };

        studies.push(study.clone());
        info!("Stored case study '{}' with ID {}", study.title, study.id);
        Ok(study)
    }

    async fn get_case_study(&self, id: &str) -> StorageResult<Option<CaseStudy>> {
        let studies = self.case_studies.read().await;
        Ok(studies.iter().find(|s| s.id == id).cloned())
    }

    async fn list_case_studies(&self) -> StorageResult<Vec<CaseStudy>> {
        Ok(self.case_studies.read().await.clone())
    }

    async fn list_case_studies_with_filter(
        &self,
        filter: CaseStudyFilter,
    ) -> StorageResult<Vec<CaseStudy>> {
        let studies = self.case_studies.read().await;

        let mut matched: Vec<CaseStudy> = studies
            .iter()
            .filter(|s| {
                if let Some(ref industry) = filter.industry {
                    if !s.industry.eq_ignore_ascii_case(industry) {
                        return false;
                    }
                }
                if let Some(ref tags) = filter.tags {
                    let study_tags: Vec<String> =
                        s.tags.iter().map(|t| t.to_lowercase()).collect();
                    if !tags
                        .iter()
                        .all(|t| study_tags.contains(&t.to_lowercase()))
                    {
                        return false;
                    }
                }
                if let Some(ref search) = filter.search {
                    let needle = search.to_lowercase();
                    let haystack = format!(
                        "{} {} {}",
                        s.title.to_lowercase(),
                        s.description.to_lowercase(),
                        s.outcome.to_lowercase()
                    );
                    if !haystack.contains(&needle) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        if let Some(limit) = filter.limit {
            matched.truncate(limit);
        }

        Ok(matched)
    }

    async fn update_case_study(
        &self,
        id: &str,
        input: CaseStudyUpdateInput,
    ) -> StorageResult<CaseStudy> {
        let mut studies = self.case_studies.write().await;

        if let Some(ref title) = input.title {
            if studies.iter().any(|s| s.id != id && s.title == *title) {
                return Err(StorageError::DuplicateTitle(title.clone()));
            }
        }

        let study = studies
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        if let Some(title) = input.title {
            study.title = title;
        }
        if let Some(industry) = input.industry {
            study.industry = industry;
        }
        if let Some(description) = input.description {
            study.description = description;
        }
        if let Some(tags) = input.tags {
            study.tags = tags;
        }
        if let Some(outcome) = input.outcome {
            study.outcome = outcome;
        }
        if let Some(budget) = input.budget {
            study.budget = Some(budget);
        }
        if let Some(timeline) = input.timeline {
            study.timeline = Some(timeline);
        }
        study.updated_at = Utc::now();

        Ok(study.clone())
    }

    async fn delete_case_study(&self, id: &str) -> StorageResult<()> {
        let mut studies = self.case_studies.write().await;
        let before = studies.len();
        studies.retain(|s| s.id != id);

        if studies.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PitchStore for MemoryStore {
    async fn save_pitch(&self, pitch: SolutionPitch) -> StorageResult<SolutionPitch> {
        let mut pitches = self.pitches.write().await;

        match pitches.iter_mut().find(|p| p.id == pitch.id) {
            Some(existing) => *existing = pitch.clone(),
            None => pitches.push(pitch.clone()),
        }

        info!("Stored pitch '{}' (v{})", pitch.title, pitch.version);
        Ok(pitch)
    }

    async fn get_pitch(&self, id: &str) -> StorageResult<Option<SolutionPitch>> {
        let pitches = self.pitches.read().await;
        Ok(pitches.iter().find(|p| p.id == id).cloned())
    }

    async fn list_pitches(&self) -> StorageResult<Vec<SolutionPitch>> {
        Ok(self.pitches.read().await.clone())
    }

    async fn list_pitches_for_brief(&self, brief_id: &str) -> StorageResult<Vec<SolutionPitch>> {
        let pitches = self.pitches.read().await;
        Ok(pitches
            .iter()
            .filter(|p| p.brief_id == brief_id)
            .cloned()
            .collect())
    }

    async fn delete_pitch(&self, id: &str) -> StorageResult<()> {
        let mut pitches = self.pitches.write().await;
        let before = pitches.len();
        pitches.retain(|p| p.id != id);

        if pitches.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
