use crate::types::{
    BriefCreateInput, BriefUpdateInput, CaseStudyCreateInput, CaseStudyUpdateInput,
};

/// Validation errors for record data
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates brief data for submission
pub fn validate_brief_data(data: &BriefCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Brief title is required"));
    }

    if data.industry.trim().is_empty() {
        errors.push(ValidationError::new("industry", "Industry is required"));
    }

    if data.budget.trim().is_empty() {
        errors.push(ValidationError::new("budget", "Budget range is required"));
    }

    if data.objectives.trim().is_empty() {
        errors.push(ValidationError::new(
            "objectives",
            "Project objectives are required",
        ));
    }

    if data.timeline.trim().is_empty() {
        errors.push(ValidationError::new(
            "timeline",
            "Timeline range is required",
        ));
    }

    errors
}

/// Validates brief update data
pub fn validate_brief_update(data: &BriefUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref title) = data.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "Brief title cannot be empty"));
        }
    }

    if let Some(ref industry) = data.industry {
        if industry.trim().is_empty() {
            errors.push(ValidationError::new("industry", "Industry cannot be empty"));
        }
    }

    if let Some(ref budget) = data.budget {
        if budget.trim().is_empty() {
            errors.push(ValidationError::new(
                "budget",
                "Budget range cannot be empty",
            ));
        }
    }

    if let Some(ref objectives) = data.objectives {
        if objectives.trim().is_empty() {
            errors.push(ValidationError::new(
                "objectives",
                "Project objectives cannot be empty",
            ));
        }
    }

    if let Some(ref timeline) = data.timeline {
        if timeline.trim().is_empty() {
            errors.push(ValidationError::new(
                "timeline",
                "Timeline range cannot be empty",
            ));
        }
    }

    errors
}

/// Validates case study data for creation
pub fn validate_case_study_data(data: &CaseStudyCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Case study title is required"));
    }

    if data.industry.trim().is_empty() {
        errors.push(ValidationError::new("industry", "Industry is required"));
    }

    if data.description.trim().is_empty() {
        errors.push(ValidationError::new(
            "description",
            "Description is required",
        ));
    }

    if let Some(ref tags) = data.tags {
        for tag in tags {
            if tag.trim().is_empty() {
                errors.push(ValidationError::new("tags", "Tags cannot be empty"));
                break;
            }
        }
    }

    errors
}

/// Validates case study update data
pub fn validate_case_study_update(data: &CaseStudyUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref title) = data.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new(
                "title",
                "Case study title cannot be empty",
            ));
        }
    }

    if let Some(ref industry) = data.industry {
        if industry.trim().is_empty() {
            errors.push(ValidationError::new("industry", "Industry cannot be empty"));
        }
    }

    if let Some(ref description) = data.description {
        if description.trim().is_empty() {
            errors.push(ValidationError::new(
                "description",
                "Description cannot be empty",
            ));
        }
    }

    if let Some(ref tags) = data.tags {
        for tag in tags {
            if tag.trim().is_empty() {
                errors.push(ValidationError::new("tags", "Tags cannot be empty"));
                break;
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_brief_input() -> BriefCreateInput {
        BriefCreateInput {
            title: "E-commerce Platform".to_string(),
            industry: "Technology".to_string(),
            budget: "$50,000 - $100,000".to_string(),
            objectives: "user authentication and product catalog".to_string(),
            timeline: "3-4 months".to_string(),
            client_details: "Mid-size retailer".to_string(),
        }
    }

    #[test]
    fn test_validate_brief_data_valid() {
        let errors = validate_brief_data(&valid_brief_input());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_brief_data_missing_fields() {
        let data = BriefCreateInput {
            title: "".to_string(),
            industry: "  ".to_string(),
            budget: "".to_string(),
            objectives: "".to_string(),
            timeline: "".to_string(),
            client_details: "".to_string(),
        };

        let errors = validate_brief_data(&data);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["title", "industry", "budget", "objectives", "timeline"]
        );
    }

    #[test]
    fn test_validate_brief_update_partial() {
        let data = BriefUpdateInput {
            title: Some("New Title".to_string()),
            industry: None,
            budget: Some("   ".to_string()),
            objectives: None,
            timeline: None,
            client_details: None,
        };

        let errors = validate_brief_update(&data);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "budget");
    }

    #[test]
    fn test_validate_case_study_empty_tag() {
        let data = CaseStudyCreateInput {
            title: "Retail Rebuild".to_string(),
            industry: "Retail".to_string(),
            description: "storefront modernization".to_string(),
            tags: Some(vec!["ecommerce".to_string(), "".to_string()]),
            outcome: "40% conversion lift".to_string(),
            budget: None,
            timeline: None,
        };

        let errors = validate_case_study_data(&data);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tags");
    }
}
