use serde::{Deserialize, Serialize};

/// Expert availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Offline,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Offline => "offline",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Status of a case history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Open,
    Resolved,
}

/// A candidate responder in the expert roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(rename = "experience", default)]
    pub experience_years: u32,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    pub availability: Availability,
    #[serde(rename = "currentWorkload", default)]
    pub current_workload: f64,
    /// Average response time in minutes
    #[serde(rename = "avgResponseTime")]
    pub avg_response_time: f64,
    /// Historical success rate as a percentage
    #[serde(rename = "successRate", default)]
    pub success_rate: f64,
    #[serde(rename = "casesResolved", default)]
    pub cases_resolved: u32,
    /// Most recent first
    #[serde(rename = "recentCases", default)]
    pub recent_cases: Vec<String>,
}

impl Expert {
    /// Offline experts cannot be assigned
    pub fn is_eligible(&self) -> bool {
        self.availability != Availability::Offline
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Incident report as consumed by the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub severity: Severity,
}

impl Case {
    /// Text searched by keyword extraction
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.module)
    }
}

/// Past or newly submitted case used for similarity lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseHistoryEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(rename = "resolvedBy", default)]
    pub resolved_by: Option<String>,
    /// Resolution duration in minutes
    #[serde(rename = "resolutionTime", default)]
    pub resolution_time: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: CaseStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CaseHistoryEntry {
    /// Open entry for a case entering the system
    pub fn open(case: &Case) -> Self {
        Self {
            id: case.id.clone(),
            title: case.title.clone(),
            module: case.module.clone(),
            severity: case.severity,
            resolved_by: None,
            resolution_time: None,
            skills: Vec::new(),
            status: CaseStatus::Open,
            created_at: Some(chrono::Utc::now()),
        }
    }

    pub fn is_resolved_by(&self, expert_id: &str) -> bool {
        self.status == CaseStatus::Resolved && self.resolved_by.as_deref() == Some(expert_id)
    }

    /// Text searched by keyword extraction. History entries carry no description.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.module)
    }
}

/// Per-expert sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub skill_relevance: f64,
    pub availability: f64,
    pub response_time: f64,
    pub success_rate: f64,
    pub case_similarity: f64,
}

/// Expert annotated with its match scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredExpert {
    #[serde(flatten)]
    pub expert: Expert,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    pub scores: SubScores,
}

/// Weighted criterion descriptor for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    /// Weight as a whole percentage
    pub weight: u8,
}

/// Scoring weights
///
/// The weights are a policy constant; use [`ScoringWeights::POLICY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill_relevance: f64,
    pub success_rate: f64,
    pub availability: f64,
    pub response_time: f64,
    pub case_similarity: f64,
}

impl ScoringWeights {
    pub const POLICY: ScoringWeights = ScoringWeights {
        skill_relevance: 0.35,
        success_rate: 0.25,
        availability: 0.20,
        response_time: 0.15,
        case_similarity: 0.05,
    };

    /// Weighted combination of the sub-scores
    ///
    /// Summation order is fixed: results near a .5 boundary round differently otherwise.
    pub fn combine(&self, scores: &SubScores) -> f64 {
        scores.skill_relevance * self.skill_relevance
            + scores.availability * self.availability
            + scores.response_time * self.response_time
            + scores.success_rate * self.success_rate
            + scores.case_similarity * self.case_similarity
    }

    /// Criteria in display order (heaviest first)
    pub fn criteria(&self) -> Vec<Criterion> {
        [
            ("Skill Relevance", self.skill_relevance),
            ("Success Rate", self.success_rate),
            ("Availability", self.availability),
            ("Response Time", self.response_time),
            ("Case Similarity", self.case_similarity),
        ]
        .into_iter()
        .map(|(name, weight)| Criterion {
            name: name.to_string(),
            weight: (weight * 100.0).round() as u8,
        })
        .collect()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::POLICY
    }
}

/// Outcome of a single matching run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub experts: Vec<ScoredExpert>,
    #[serde(rename = "analysisTime")]
    pub analysis_time_ms: u64,
    pub experts_evaluated: usize,
    pub overall_confidence: f64,
    pub criteria: Vec<Criterion>,
    pub key_factors: Vec<String>,
}

impl MatchResult {
    pub fn top(&self) -> Option<&ScoredExpert> {
        self.experts.first()
    }
}
