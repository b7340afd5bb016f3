use crate::models::{Availability, Case, CaseHistoryEntry, Expert};
use crate::services::seed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Recent case ids kept per expert
pub const MAX_RECENT_CASES: usize = 10;

/// Registry shared between request handlers
///
/// Matching takes a read guard; availability updates and case recording take
/// a write guard, which serializes the read-modify-write on roster and history.
pub type SharedRegistry = Arc<tokio::sync::RwLock<ExpertRegistry>>;

/// Errors that can occur while loading a registry seed
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate expert id: {0}")]
    DuplicateExpert(String),

    #[error("Invalid expert '{id}': {reason}")]
    InvalidExpert { id: String, reason: String },
}

/// On-disk seed layout
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    experts: Vec<Expert>,
    #[serde(default)]
    history: Vec<CaseHistoryEntry>,
}

/// Expert roster plus case history
///
/// Owns every [`Expert`] and [`CaseHistoryEntry`] for the lifetime of the process.
/// Experts are never removed; history is append-only.
#[derive(Debug, Clone, Default)]
pub struct ExpertRegistry {
    experts: Vec<Expert>,
    history: Vec<CaseHistoryEntry>,
}

impl ExpertRegistry {
    pub fn new(experts: Vec<Expert>, history: Vec<CaseHistoryEntry>) -> Self {
        Self { experts, history }
    }

    /// Registry populated with the built-in roster and resolved cases
    pub fn seeded() -> Self {
        Self::new(seed::default_experts(), seed::default_history())
    }

    /// Load and validate a TOML seed file
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_seed_str(&raw)
    }

    /// Parse and validate TOML seed content
    pub fn from_seed_str(raw: &str) -> Result<Self, RegistryError> {
        let seed: SeedFile = toml::from_str(raw)?;

        let mut experts = seed.experts;
        validate_experts(&experts)?;
        for expert in &mut experts {
            expert.recent_cases.truncate(MAX_RECENT_CASES);
        }

        Ok(Self::new(experts, seed.history))
    }

    pub fn list_experts(&self) -> &[Expert] {
        &self.experts
    }

    pub fn get_expert(&self, id: &str) -> Option<&Expert> {
        self.experts.iter().find(|e| e.id == id)
    }

    /// Update an expert's availability in place
    ///
    /// Unknown ids are ignored; the return value reports whether anything changed.
    pub fn set_availability(&mut self, id: &str, availability: Availability) -> bool {
        match self.experts.iter_mut().find(|e| e.id == id) {
            Some(expert) => {
                tracing::debug!("Expert {} availability {} -> {}", id, expert.availability, availability);
                expert.availability = availability;
                true
            }
            None => {
                tracing::warn!("Ignoring availability update for unknown expert {}", id);
                false
            }
        }
    }

    /// Mark an expert busy after they are requested for a case
    ///
    /// Offline experts cannot be assigned and are left untouched.
    pub fn request_expert(&mut self, id: &str) -> Option<Expert> {
        if !self.get_expert(id)?.is_eligible() {
            tracing::warn!("Refusing to request offline expert {}", id);
            return None;
        }

        if self.set_availability(id, Availability::Busy) {
            self.get_expert(id).cloned()
        } else {
            None
        }
    }

    /// Append an open history entry for a new case
    ///
    /// Ids are not deduplicated.
    pub fn record_case(&mut self, case: &Case) {
        self.history.push(CaseHistoryEntry::open(case));
        tracing::debug!("Recorded case {} ({} history entries)", case.id, self.history.len());
    }

    /// History entries resolved by the given expert
    pub fn history_for(&self, expert_id: &str) -> Vec<&CaseHistoryEntry> {
        self.history
            .iter()
            .filter(|entry| entry.resolved_by.as_deref() == Some(expert_id))
            .collect()
    }

    pub fn history(&self) -> &[CaseHistoryEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(tokio::sync::RwLock::new(self))
    }
}

fn validate_experts(experts: &[Expert]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();

    for expert in experts {
        if !seen.insert(expert.id.as_str()) {
            return Err(RegistryError::DuplicateExpert(expert.id.clone()));
        }

        let invalid = |reason: &str| RegistryError::InvalidExpert {
            id: expert.id.clone(),
            reason: reason.to_string(),
        };

        if expert.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if !(0.0..=1.0).contains(&expert.current_workload) {
            return Err(invalid("currentWorkload must be within 0..=1"));
        }
        if !(0.0..=100.0).contains(&expert.success_rate) {
            return Err(invalid("successRate must be within 0..=100"));
        }
        if !expert.avg_response_time.is_finite() || expert.avg_response_time <= 0.0 {
            return Err(invalid("avgResponseTime must be positive"));
        }
    }

    Ok(())
}
