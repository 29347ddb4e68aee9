use pitchline_core::types::{CaseStudy, ProjectBrief, ScoredCaseStudy};
use tracing::debug;

use crate::scorer::relevance_score;

/// Score every case study against the brief and return the top `limit`,
/// sorted descending by relevance.
///
/// The sort is stable: exact score ties preserve the relative order of the
/// input collection, with no secondary key. Callers that need deterministic
/// ordering among ties must pre-order their input. The input is never
/// mutated.
pub fn rank(brief: &ProjectBrief, case_studies: &[CaseStudy], limit: usize) -> Vec<ScoredCaseStudy> {
    let mut scored: Vec<ScoredCaseStudy> = case_studies
        .iter()
        .map(|case_study| ScoredCaseStudy {
            relevance_score: relevance_score(brief, case_study),
            case_study: case_study.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    scored.truncate(limit);

    debug!(
        brief_id = %brief.id,
        candidates = case_studies.len(),
        returned = scored.len(),
        "ranked case studies"
    );

    scored
}

/// Like [`rank`], but drops entries below `threshold` before truncating.
/// Used by pitch composition with the inclusion threshold and by
/// recommendation callers with their own cut-offs.
pub fn rank_above(
    brief: &ProjectBrief,
    case_studies: &[CaseStudy],
    threshold: u8,
    limit: usize,
) -> Vec<ScoredCaseStudy> {
    let mut scored = rank(brief, case_studies, case_studies.len());
    scored.retain(|s| s.relevance_score >= threshold);
    scored.truncate(limit);
    scored
}
