use std::time::Instant;

use crate::models::{Case, Expert, MatchResult, ScoredExpert, ScoringWeights};
use crate::core::{
    keywords::{KeywordExtractor, VocabularyExtractor},
    scoring::{calculate_match_percentage, score_expert},
    summary::{calculate_confidence, key_factors},
};
use crate::services::ExpertRegistry;

/// Minimum match percentage for an expert to be reported
pub const QUALIFICATION_THRESHOLD: u8 = 60;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Keyword extraction from the case text
/// 2. Sub-scoring of every expert in the registry
/// 3. Weighted combination and rounding
/// 4. Stable ranking and qualification filter
/// 5. Confidence and key-factor summary
///
/// The matcher holds no registry state, so one instance can serve any number
/// of registries.
#[derive(Debug, Clone, Default)]
pub struct Matcher<E = VocabularyExtractor> {
    extractor: E,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: KeywordExtractor> Matcher<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Score, rank and filter every expert in the registry against a case
    ///
    /// Never fails: an empty registry or a case without recognisable keywords
    /// yields an empty expert list with zero confidence.
    pub fn match_experts(&self, case: &Case, registry: &ExpertRegistry) -> MatchResult {
        let started = Instant::now();
        let weights = ScoringWeights::POLICY;

        let case_keywords = self.extractor.extract(&case.search_text());
        let history = registry.history();

        let mut ranked: Vec<ScoredExpert> = registry
            .list_experts()
            .iter()
            .map(|expert| {
                let scores = score_expert(&self.extractor, &case_keywords, expert, history);
                ScoredExpert {
                    expert: expert.clone(),
                    match_percentage: calculate_match_percentage(&scores, &weights),
                    scores,
                }
            })
            .collect();

        // Stable: equal percentages keep registry order
        ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        let qualified: Vec<ScoredExpert> = ranked
            .into_iter()
            .filter(|e| e.match_percentage >= QUALIFICATION_THRESHOLD)
            .collect();

        let analysis_time_ms = started.elapsed().as_millis() as u64;
        let overall_confidence = calculate_confidence(&qualified);
        let key_factors = key_factors(&qualified);

        tracing::debug!(
            "Matched case {} (keywords: {:?}): {} of {} experts qualified, confidence {:.2}",
            case.id,
            case_keywords,
            qualified.len(),
            registry.len(),
            overall_confidence
        );

        MatchResult {
            experts: qualified,
            analysis_time_ms,
            experts_evaluated: registry.len(),
            overall_confidence,
            criteria: weights.criteria(),
            key_factors,
        }
    }

    /// Request every qualified, currently available expert at once
    ///
    /// Escalated experts are marked busy. The returned match reflects the
    /// roster before escalation.
    pub fn escalate(&self, case: &Case, registry: &mut ExpertRegistry) -> (MatchResult, Vec<Expert>) {
        let result = self.match_experts(case, registry);

        let escalated: Vec<Expert> = result
            .experts
            .iter()
            .filter(|scored| scored.expert.is_available())
            .filter_map(|scored| registry.request_expert(&scored.expert.id))
            .collect();

        tracing::info!("Escalated case {} to {} experts", case.id, escalated.len());

        (result, escalated)
    }
}
