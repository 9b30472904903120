use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A job posting submitted for screening. Immutable once submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionData {
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub industry: String,
}

impl JobDescriptionData {
    /// A posting needs at least a title and a description to be screened against.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("job title cannot be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation(
                "job description cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Company name as persisted with saved results.
    pub fn company_or_default(&self) -> String {
        if self.company.trim().is_empty() {
            "Unknown Company".to_string()
        } else {
            self.company.clone()
        }
    }
}
