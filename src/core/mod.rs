// Core algorithm exports
pub mod keywords;
pub mod matcher;
pub mod scoring;
pub mod summary;

pub use keywords::{KeywordExtractor, VocabularyExtractor, DEFAULT_VOCABULARY};
pub use matcher::{Matcher, QUALIFICATION_THRESHOLD};
pub use scoring::{availability_score, case_similarity_score, response_time_score, skill_relevance, success_rate_score};
pub use summary::{calculate_confidence, key_factors};
