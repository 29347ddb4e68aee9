use pitchline_core::types::ProjectBrief;
use rand::Rng;

/// Industry-keyed keyword lists for title generation. Industries are an
/// open set; anything unrecognized falls back to the generic list.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["Innovative", "Scalable", "Cutting-Edge", "Agile"],
    ),
    (
        "healthcare",
        &["Patient-Centered", "Compassionate", "Reliable", "Secure"],
    ),
    (
        "finance",
        &["Trusted", "Secure", "Strategic", "Transparent"],
    ),
    (
        "retail",
        &["Customer-First", "Engaging", "Seamless", "Dynamic"],
    ),
    (
        "education",
        &["Empowering", "Accessible", "Interactive", "Adaptive"],
    ),
    (
        "manufacturing",
        &["Efficient", "Robust", "Streamlined", "Precision-Built"],
    ),
];

const FALLBACK_KEYWORDS: &[&str] = &["Professional"];

/// Keyword list for an industry, case-insensitive
pub fn keywords_for(industry: &str) -> &'static [&'static str] {
    let needle = industry.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(FALLBACK_KEYWORDS)
}

/// Generate a pitch title from the brief's industry keyword list.
///
/// The keyword draw is the single sanctioned non-determinism in the whole
/// composition path; callers pin it by passing a seeded generator.
pub fn generate_title<R: Rng>(brief: &ProjectBrief, rng: &mut R) -> String {
    let keywords = keywords_for(&brief.industry);
    let keyword = keywords[rng.gen_range(0..keywords.len())];
    format!("{} {} Solution", keyword, brief.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn brief(industry: &str) -> ProjectBrief {
        ProjectBrief {
            id: "brief1".to_string(),
            title: "E-commerce Platform".to_string(),
            industry: industry.to_string(),
            budget: "$50,000 - $100,000".to_string(),
            objectives: "user authentication".to_string(),
            timeline: "3-4 months".to_string(),
            client_details: "Mid-size retailer".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_title_uses_industry_keyword() {
        let mut rng = StdRng::seed_from_u64(7);
        let title = generate_title(&brief("Technology"), &mut rng);

        let keyword = title.strip_suffix(" E-commerce Platform Solution").unwrap();
        assert!(keywords_for("technology").contains(&keyword));
    }

    #[test]
    fn test_title_is_deterministic_for_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_title(&brief("Healthcare"), &mut rng_a),
            generate_title(&brief("Healthcare"), &mut rng_b)
        );
    }

    #[test]
    fn test_unknown_industry_falls_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let title = generate_title(&brief("Aerospace"), &mut rng);
        assert_eq!(title, "Professional E-commerce Platform Solution");
    }

    #[test]
    fn test_industry_lookup_is_case_insensitive() {
        assert_eq!(keywords_for("TECHNOLOGY"), keywords_for("technology"));
        assert_eq!(keywords_for("Retail"), keywords_for("retail"));
    }
}
