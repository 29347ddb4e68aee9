use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use pitchline_core::types::{
    BriefCreateInput, BriefUpdateInput, CaseStudy, CaseStudyCreateInput, CaseStudyUpdateInput,
    ProjectBrief,
};
use pitchline_core::validation::{
    validate_brief_data, validate_brief_update, validate_case_study_data,
    validate_case_study_update, ValidationError,
};
use pitchline_storage::{BriefStore, CaseStudyFilter, CaseStudyStore, StorageError};

/// Manager errors
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Manages customer project briefs
pub struct BriefManager {
    store: Arc<dyn BriefStore>,
}

impl BriefManager {
    pub fn new(store: Arc<dyn BriefStore>) -> Self {
        Self { store }
    }

    pub async fn list_briefs(&self) -> ManagerResult<Vec<ProjectBrief>> {
        Ok(self.store.list_briefs().await?)
    }

    pub async fn get_brief(&self, id: &str) -> ManagerResult<Option<ProjectBrief>> {
        Ok(self.store.get_brief(id).await?)
    }

    pub async fn submit_brief(&self, data: BriefCreateInput) -> ManagerResult<ProjectBrief> {
        let validation_errors = validate_brief_data(&data);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let brief = self.store.create_brief(data).await?;
        info!("Submitted brief '{}' with ID {}", brief.title, brief.id);
        Ok(brief)
    }

    pub async fn update_brief(
        &self,
        id: &str,
        updates: BriefUpdateInput,
    ) -> ManagerResult<ProjectBrief> {
        let validation_errors = validate_brief_update(&updates);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let brief = self.store.update_brief(id, updates).await?;
        info!("Updated brief '{}' (ID: {})", brief.title, brief.id);
        Ok(brief)
    }

    pub async fn delete_brief(&self, id: &str) -> ManagerResult<bool> {
        if let Some(brief) = self.store.get_brief(id).await? {
            self.store.delete_brief(id).await?;
            info!("Deleted brief '{}' (ID: {})", brief.title, brief.id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Manages the case study library
pub struct CaseStudyManager {
    store: Arc<dyn CaseStudyStore>,
}

impl CaseStudyManager {
    pub fn new(store: Arc<dyn CaseStudyStore>) -> Self {
        Self { store }
    }

    pub async fn list_case_studies(&self) -> ManagerResult<Vec<CaseStudy>> {
        Ok(self.store.list_case_studies().await?)
    }

    pub async fn search_case_studies(
        &self,
        filter: CaseStudyFilter,
    ) -> ManagerResult<Vec<CaseStudy>> {
        Ok(self.store.list_case_studies_with_filter(filter).await?)
    }

    pub async fn get_case_study(&self, id: &str) -> ManagerResult<Option<CaseStudy>> {
        Ok(self.store.get_case_study(id).await?)
    }

    pub async fn add_case_study(&self, data: CaseStudyCreateInput) -> ManagerResult<CaseStudy> {
        let validation_errors = validate_case_study_data(&data);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let study = self.store.create_case_study(data).await?;
        info!("Added case study '{}' with ID {}", study.title, study.id);
        Ok(study)
    }

    pub async fn update_case_study(
        &self,
        id: &str,
        updates: CaseStudyUpdateInput,
    ) -> ManagerResult<CaseStudy> {
        let validation_errors = validate_case_study_update(&updates);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let study = self.store.update_case_study(id, updates).await?;
        info!("Updated case study '{}' (ID: {})", study.title, study.id);
        Ok(study)
    }

    pub async fn delete_case_study(&self, id: &str) -> ManagerResult<bool> {
        if let Some(study) = self.store.get_case_study(id).await? {
            self.store.delete_case_study(id).await?;
            info!("Deleted case study '{}' (ID: {})", study.title, study.id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
