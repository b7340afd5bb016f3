//! Expert Match - incident response expert matching
//!
//! This library provides the scoring engine that ranks a roster of experts
//! against an incident case. Five independent sub-scores are combined with
//! fixed policy weights, filtered by a qualification threshold, and summarised
//! into a confidence figure and a handful of key factors.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{KeywordExtractor, Matcher, VocabularyExtractor, QUALIFICATION_THRESHOLD};
pub use crate::models::{Availability, Case, CaseHistoryEntry, Expert, MatchResult, ScoredExpert, Severity};
pub use crate::services::{ExpertRegistry, RegistryError};
