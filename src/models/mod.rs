// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, Case, CaseHistoryEntry, CaseStatus, Criterion, Expert, MatchResult, ScoredExpert, ScoringWeights, Severity, SubScores};
pub use requests::{CaseRequest, MatchExpertsRequest, UpdateAvailabilityRequest};
pub use responses::{ErrorResponse, EscalationResponse, ExpertHistoryResponse, ExpertListResponse, HealthResponse, RecordCaseResponse};
