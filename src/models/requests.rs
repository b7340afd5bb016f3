use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Availability, Case, Severity};

/// Case fields as submitted by clients
///
/// Only the title is required; the rest is defaulted in [`CaseRequest::into_case`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CaseRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl CaseRequest {
    pub fn into_case(self) -> Case {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("CASE-{}", uuid::Uuid::new_v4()));

        Case {
            id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            module: self.module.unwrap_or_default(),
            severity: self.severity.unwrap_or_default(),
        }
    }
}

/// Request to match experts against a case
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchExpertsRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub case: CaseRequest,
    /// Append the case to history before matching
    #[serde(rename = "recordHistory", default = "default_record_history")]
    pub record_history: bool,
}

fn default_record_history() -> bool {
    true
}

/// Request to change an expert's availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub availability: Availability,
}
