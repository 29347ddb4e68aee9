use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::composer::compose;
use crate::error::{PitchError, Result};
use crate::lifecycle::{transition, PitchAction};
use pitchline_core::types::{PitchEditInput, ProjectBrief, ScoredCaseStudy, SolutionPitch};
use pitchline_core::validation::ValidationError;
use pitchline_matching::rank;
use pitchline_storage::{BriefStore, CaseStudyStore, PitchStore};

/// Workflow facade wiring the record stores to the matching and
/// composition core. The stores are injected; the core itself stays pure.
pub struct PitchManager {
    briefs: Arc<dyn BriefStore>,
    case_studies: Arc<dyn CaseStudyStore>,
    pitches: Arc<dyn PitchStore>,
}

impl PitchManager {
    pub fn new(
        briefs: Arc<dyn BriefStore>,
        case_studies: Arc<dyn CaseStudyStore>,
        pitches: Arc<dyn PitchStore>,
    ) -> Self {
        Self {
            briefs,
            case_studies,
            pitches,
        }
    }

    /// Ranked case studies for the recommendation view (typically top 3-5)
    pub async fn recommend(&self, brief_id: &str, limit: usize) -> Result<Vec<ScoredCaseStudy>> {
        let brief = self.load_brief(brief_id).await?;
        let studies = self.case_studies.list_case_studies().await?;
        Ok(rank(&brief, &studies, limit))
    }

    /// Compose and persist a draft pitch for a brief
    pub async fn generate_pitch(&self, brief_id: &str) -> Result<SolutionPitch> {
        let mut rng = StdRng::from_entropy();
        self.generate_pitch_with_rng(brief_id, &mut rng).await
    }

    /// Like [`generate_pitch`](Self::generate_pitch), with the title
    /// keyword draw pinned to a caller-supplied generator.
    pub async fn generate_pitch_with_rng<R: Rng + Send>(
        &self,
        brief_id: &str,
        rng: &mut R,
    ) -> Result<SolutionPitch> {
        let brief = self.load_brief(brief_id).await?;
        let studies = self.case_studies.list_case_studies().await?;

        let ranked = rank(&brief, &studies, studies.len());
        let pitch = compose(&brief, &ranked, rng);

        let saved = self.pitches.save_pitch(pitch).await?;
        info!(
            "Generated pitch {} (v{}) for brief {}",
            saved.id, saved.version, brief_id
        );
        Ok(saved)
    }

    pub async fn get_pitch(&self, pitch_id: &str) -> Result<Option<SolutionPitch>> {
        Ok(self.pitches.get_pitch(pitch_id).await?)
    }

    pub async fn pitches_for_brief(&self, brief_id: &str) -> Result<Vec<SolutionPitch>> {
        Ok(self.pitches.list_pitches_for_brief(brief_id).await?)
    }

    /// Save a manual edit of title or content.
    ///
    /// Each explicit save increments `version` by 1 and refreshes
    /// `updated_at`. Scoring and the cited case studies are frozen at
    /// composition time and never touched here.
    pub async fn save_edit(&self, pitch_id: &str, edit: PitchEditInput) -> Result<SolutionPitch> {
        if edit.title.is_none() && edit.content.is_none() {
            return Err(PitchError::Validation(vec![ValidationError::new(
                "content",
                "An edit must provide a new title or content",
            )]));
        }

        let mut pitch = self.load_pitch(pitch_id).await?;

        if let Some(title) = edit.title {
            pitch.title = title;
        }
        if let Some(content) = edit.content {
            pitch.content = content;
        }
        pitch.version += 1;
        pitch.updated_at = Utc::now();

        let saved = self.pitches.save_pitch(pitch).await?;
        info!("Saved edit of pitch {} (now v{})", saved.id, saved.version);
        Ok(saved)
    }

    /// Team member sends the draft for review
    pub async fn submit(&self, pitch_id: &str) -> Result<SolutionPitch> {
        self.apply_action(pitch_id, PitchAction::Submit).await
    }

    /// Manager accepts a submitted pitch
    pub async fn approve(&self, pitch_id: &str) -> Result<SolutionPitch> {
        self.apply_action(pitch_id, PitchAction::Approve).await
    }

    /// Manager declines a submitted pitch
    pub async fn reject(&self, pitch_id: &str) -> Result<SolutionPitch> {
        self.apply_action(pitch_id, PitchAction::Reject).await
    }

    /// Reopen an approved or rejected pitch for editing. Keeps the version
    /// counter and the frozen case study selection.
    pub async fn revise(&self, pitch_id: &str) -> Result<SolutionPitch> {
        self.apply_action(pitch_id, PitchAction::Revise).await
    }

    async fn apply_action(&self, pitch_id: &str, action: PitchAction) -> Result<SolutionPitch> {
        let mut pitch = self.load_pitch(pitch_id).await?;

        let next = transition(pitch.status, action)?;
        pitch.status = next;
        pitch.updated_at = Utc::now();

        let saved = self.pitches.save_pitch(pitch).await?;
        info!("Pitch {} is now {}", saved.id, saved.status);
        Ok(saved)
    }

    async fn load_brief(&self, brief_id: &str) -> Result<ProjectBrief> {
        self.briefs
            .get_brief(brief_id)
            .await?
            .ok_or_else(|| PitchError::BriefNotFound(brief_id.to_string()))
    }

    async fn load_pitch(&self, pitch_id: &str) -> Result<SolutionPitch> {
        self.pitches
            .get_pitch(pitch_id)
            .await?
            .ok_or_else(|| PitchError::PitchNotFound(pitch_id.to_string()))
    }
}
