use serde::{Deserialize, Serialize};
use crate::models::domain::{CaseHistoryEntry, Expert, MatchResult};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "expertCount")]
    pub expert_count: usize,
    #[serde(rename = "historyCount")]
    pub history_count: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Response for the expert listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertListResponse {
    pub experts: Vec<Expert>,
    pub total: usize,
}

/// Response for the expert history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertHistoryResponse {
    #[serde(rename = "expertId")]
    pub expert_id: String,
    pub cases: Vec<CaseHistoryEntry>,
}

/// Response for the add-case endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCaseResponse {
    #[serde(rename = "caseId")]
    pub case_id: String,
    #[serde(rename = "historyCount")]
    pub history_count: usize,
}

/// Response for the escalation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationResponse {
    #[serde(rename = "caseId")]
    pub case_id: String,
    pub escalated: Vec<Expert>,
    #[serde(rename = "match")]
    pub match_result: MatchResult,
}
