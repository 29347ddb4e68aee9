use std::collections::HashSet;

use pitchline_core::types::{CaseStudy, ProjectBrief};
use tracing::debug;

use crate::interval::parse_interval;

/// Weights for the four scoring factors. They are designed to sum to 1.0,
/// but the scorer divides by the sum actually applied rather than assuming
/// it, so re-tuning cannot break the 0-100 bound.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub industry: f64,
    pub budget: f64,
    pub timeline: f64,
    pub content: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            industry: 0.30,
            budget: 0.25,
            timeline: 0.20,
            content: 0.25,
        }
    }
}

/// Score a (brief, case study) pair with the default weights.
pub fn relevance_score(brief: &ProjectBrief, case_study: &CaseStudy) -> u8 {
    relevance_score_weighted(brief, case_study, &ScorerWeights::default())
}

/// Score a (brief, case study) pair: an integer in [0, 100], deterministic
/// for fixed inputs. Malformed budget/timeline text degrades to the {0,0}
/// interval sentinel instead of failing.
pub fn relevance_score_weighted(
    brief: &ProjectBrief,
    case_study: &CaseStudy,
    weights: &ScorerWeights,
) -> u8 {
    // Factor 1: industry match (case-insensitive equality).
    let f_industry = if brief.industry.to_lowercase() == case_study.industry.to_lowercase() {
        1.0
    } else {
        0.0
    };

    // Factor 2: budget compatibility (interval overlap).
    let f_budget = overlap_score(&brief.budget, case_study.budget.as_deref());

    // Factor 3: timeline compatibility (same overlap test).
    let f_timeline = overlap_score(&brief.timeline, case_study.timeline.as_deref());

    // Factor 4: content similarity (objective-token coverage).
    let f_content = content_score(&brief.objectives, &case_study.description, &case_study.tags);

    let weighted = weights.industry * f_industry
        + weights.budget * f_budget
        + weights.timeline * f_timeline
        + weights.content * f_content;
    let applied = weights.industry + weights.budget + weights.timeline + weights.content;

    if applied <= 0.0 {
        return 0;
    }

    let score = (weighted / applied * 100.0).round() as u8;

    debug!(
        case_study_id = %case_study.id,
        industry = f_industry,
        budget = f_budget,
        timeline = f_timeline,
        content = f_content,
        score,
        "scored case study"
    );

    score
}

/// 1.0 when the parsed intervals share at least one point. A missing
/// case-study range parses to {0,0}, which overlaps any interval
/// containing 0.
fn overlap_score(brief_text: &str, case_study_text: Option<&str>) -> f64 {
    let brief_interval = parse_interval(brief_text);
    let case_interval = parse_interval(case_study_text.unwrap_or(""));

    if brief_interval.overlaps(&case_interval) {
        1.0
    } else {
        0.0
    }
}

/// Fraction of brief-objective tokens that also occur in the case study's
/// description tokens or tag set. Tokenization splits on whitespace only;
/// trailing punctuation is kept, so "catalog." will not match the tag
/// "catalog".
fn content_score(objectives: &str, description: &str, tags: &[String]) -> f64 {
    let objectives = objectives.to_lowercase();
    let brief_tokens: Vec<&str> = objectives.split_whitespace().collect();

    if brief_tokens.is_empty() {
        return 0.0;
    }

    let description = description.to_lowercase();
    let description_tokens: HashSet<&str> = description.split_whitespace().collect();
    let tag_set: HashSet<String> = tags.iter().map(|t| t.to_lowercase()).collect();

    let matches = brief_tokens
        .iter()
        .filter(|token| description_tokens.contains(**token) || tag_set.contains(**token))
        .count();

    matches as f64 / brief_tokens.len() as f64
}
