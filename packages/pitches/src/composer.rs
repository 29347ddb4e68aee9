// ABOUTME: Proposal document composer
// ABOUTME: Renders the eight fixed pitch sections from a brief and its top-ranked case studies

use chrono::Utc;
use rand::Rng;
use tracing::info;

use crate::title::generate_title;
use pitchline_core::constants::{INCLUSION_THRESHOLD, MAX_CITED_STUDIES};
use pitchline_core::types::{PitchStatus, ProjectBrief, ScoredCaseStudy, SolutionPitch};
use pitchline_core::utils::generate_record_id;

/// Compose a draft pitch from a brief and its rank-ordered case studies.
///
/// Only case studies at or above the inclusion threshold are cited, at most
/// two, in rank order. Their selection is frozen into `case_study_ids`;
/// later edits never re-run scoring. The title keyword draw is the only
/// non-deterministic step.
pub fn compose<R: Rng>(
    brief: &ProjectBrief,
    ranked: &[ScoredCaseStudy],
    rng: &mut R,
) -> SolutionPitch {
    let selected: Vec<&ScoredCaseStudy> = ranked
        .iter()
        .filter(|s| s.relevance_score >= INCLUSION_THRESHOLD)
        .take(MAX_CITED_STUDIES)
        .collect();

    let sections = [
        executive_summary(brief),
        problem_statement(brief),
        solution_approach(brief),
        technical_implementation(brief),
        timeline_and_budget(brief),
        expected_outcomes(brief),
        relevant_experience(&selected),
        call_to_action(brief),
    ];

    let now = Utc::now();
    let pitch = SolutionPitch {
        id: generate_record_id(),
        brief_id: brief.id.clone(),
        title: generate_title(brief, rng),
        content: sections.join("\n\n"),
        status: PitchStatus::Draft,
        case_study_ids: selected.iter().map(|s| s.case_study.id.clone()).collect(),
        version: 1,
        created_at: now,
        updated_at: now,
    };

    info!(
        "Composed pitch '{}' for brief {} citing {} case studies",
        pitch.title,
        brief.id,
        pitch.case_study_ids.len()
    );

    pitch
}

fn executive_summary(brief: &ProjectBrief) -> String {
    format!(
        "## Executive Summary\n\
         This proposal outlines our approach to {}, a {} initiative. Based on \
         the goals described in your brief, we have assembled a delivery plan \
         sized to the stated budget of {} and the {} timeline.",
        brief.title, brief.industry, brief.budget, brief.timeline
    )
}

fn problem_statement(brief: &ProjectBrief) -> String {
    format!(
        "## Problem Statement\n\
         {} requires a delivery partner to address the following objectives:\n{}",
        brief.client_details, brief.objectives
    )
}

fn solution_approach(brief: &ProjectBrief) -> String {
    format!(
        "## Solution Approach\n\
         We will deliver {} in well-defined phases: discovery, iterative \
         build, and guided rollout. Each phase closes with a review against \
         the objectives above, so scope stays anchored to the brief.",
        brief.title
    )
}

fn technical_implementation(brief: &ProjectBrief) -> String {
    format!(
        "## Technical Implementation\n\
         Implementation follows our standard delivery practices for {} \
         engagements: short build cycles, continuous integration, and \
         acceptance criteria agreed with your stakeholders before each phase \
         begins.",
        brief.industry
    )
}

fn timeline_and_budget(brief: &ProjectBrief) -> String {
    format!(
        "## Timeline & Budget\n\
         We estimate delivery within {}, with a projected budget range of {}. \
         Both are refined together with you during discovery before any build \
         work starts.",
        brief.timeline, brief.budget
    )
}

fn expected_outcomes(brief: &ProjectBrief) -> String {
    format!(
        "## Expected Outcomes\n\
         On completion, {} will have a working solution addressing each \
         stated objective, along with documentation and a handover plan for \
         your team.",
        brief.client_details
    )
}

fn relevant_experience(selected: &[&ScoredCaseStudy]) -> String {
    if selected.is_empty() {
        return "## Relevant Experience\n\
                Our team has delivered engagements across a wide range of \
                industries and project sizes. Detailed references are \
                available on request."
            .to_string();
    }

    let citations: Vec<String> = selected
        .iter()
        .map(|s| {
            let study = &s.case_study;
            format!(
                "- {} ({}): {} [{}]",
                study.title,
                study.industry,
                study.outcome,
                study.tags.join(", ")
            )
        })
        .collect();

    format!(
        "## Relevant Experience\n\
         We have completed closely related engagements:\n{}",
        citations.join("\n")
    )
}

fn call_to_action(brief: &ProjectBrief) -> String {
    format!(
        "## Call to Action\n\
         We would welcome the opportunity to walk {} through this proposal in \
         detail. Contact us to schedule a session and agree next steps.",
        brief.client_details
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn brief() -> ProjectBrief {
        ProjectBrief {
            id: "brief1".to_string(),
            title: "E-commerce Platform".to_string(),
            industry: "Technology".to_string(),
            budget: "$50,000 - $100,000".to_string(),
            objectives: "user authentication and product catalog".to_string(),
            timeline: "3-4 months".to_string(),
            client_details: "Mid-size retailer".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn scored(id: &str, score: u8) -> ScoredCaseStudy {
        ScoredCaseStudy {
            case_study: pitchline_core::types::CaseStudy {
                id: id.to_string(),
                title: format!("Engagement {}", id),
                industry: "Technology".to_string(),
                description: "platform work".to_string(),
                tags: vec!["ecommerce".to_string(), "auth".to_string()],
                outcome: "Shipped on time".to_string(),
                budget: None,
                timeline: None,
                relevance_score: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            relevance_score: score,
        }
    }

    const SECTION_HEADINGS: [&str; 8] = [
        "## Executive Summary",
        "## Problem Statement",
        "## Solution Approach",
        "## Technical Implementation",
        "## Timeline & Budget",
        "## Expected Outcomes",
        "## Relevant Experience",
        "## Call to Action",
    ];

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let pitch = compose(&brief(), &[scored("cs1", 90)], &mut rng);

        let mut last = 0;
        for heading in SECTION_HEADINGS {
            let pos = pitch
                .content
                .find(heading)
                .unwrap_or_else(|| panic!("missing section {}", heading));
            assert!(pos >= last, "section {} out of order", heading);
            last = pos;
        }
    }

    #[test]
    fn test_cites_at_most_two_above_threshold() {
        let ranked = vec![
            scored("cs1", 95),
            scored("cs2", 80),
            scored("cs3", 75),
            scored("cs4", 40),
        ];

        let mut rng = StdRng::seed_from_u64(3);
        let pitch = compose(&brief(), &ranked, &mut rng);

        assert_eq!(pitch.case_study_ids, vec!["cs1", "cs2"]);
    }

    #[test]
    fn test_never_cites_below_threshold() {
        let ranked = vec![scored("cs1", 59), scored("cs2", 30)];

        let mut rng = StdRng::seed_from_u64(3);
        let pitch = compose(&brief(), &ranked, &mut rng);

        assert!(pitch.case_study_ids.is_empty());
        assert!(pitch
            .content
            .contains("Detailed references are available on request"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let ranked = vec![scored("cs1", 60)];

        let mut rng = StdRng::seed_from_u64(3);
        let pitch = compose(&brief(), &ranked, &mut rng);

        assert_eq!(pitch.case_study_ids, vec!["cs1"]);
    }

    #[test]
    fn test_citation_includes_study_details() {
        let mut rng = StdRng::seed_from_u64(3);
        let pitch = compose(&brief(), &[scored("cs1", 90)], &mut rng);

        assert!(pitch.content.contains("Engagement cs1"));
        assert!(pitch.content.contains("Shipped on time"));
        assert!(pitch.content.contains("ecommerce, auth"));
    }

    #[test]
    fn test_new_pitch_is_versioned_draft() {
        let mut rng = StdRng::seed_from_u64(3);
        let pitch = compose(&brief(), &[], &mut rng);

        assert_eq!(pitch.status, PitchStatus::Draft);
        assert_eq!(pitch.version, 1);
        assert_eq!(pitch.brief_id, "brief1");
        assert_eq!(pitch.created_at, pitch.updated_at);
    }

    #[test]
    fn test_content_is_deterministic_apart_from_title() {
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(99);

        let a = compose(&brief(), &[scored("cs1", 90)], &mut rng_a);
        let b = compose(&brief(), &[scored("cs1", 90)], &mut rng_b);

        assert_eq!(a.content, b.content);
        assert_eq!(a.case_study_ids, b.case_study_ids);
    }
}
