use crate::models::{Case, CaseHistoryEntry, Expert, ScoringWeights, SubScores};
use crate::core::keywords::KeywordExtractor;

/// Response time (minutes) at or beyond which the response score is zero
pub const RESPONSE_TIME_CEILING_MINS: f64 = 30.0;

/// Compute all five sub-scores for one expert
///
/// `case_keywords` must come from the same extractor, applied to the case text.
/// Scoring formula (see [`ScoringWeights::POLICY`]):
/// score = (
///     skill_relevance * 0.35 +     # Skill labels overlapping case keywords
///     availability * 0.20 +        # Free capacity, 0 unless available
///     response_time * 0.15 +       # Faster average response = higher
///     success_rate * 0.25 +        # Historical success percentage
///     case_similarity * 0.05       # Resolved cases sharing keywords
/// )
pub fn score_expert<E: KeywordExtractor + ?Sized>(
    extractor: &E,
    case_keywords: &[String],
    expert: &Expert,
    history: &[CaseHistoryEntry],
) -> SubScores {
    SubScores {
        skill_relevance: skill_relevance_for_keywords(case_keywords, &expert.skills),
        availability: availability_score(expert),
        response_time: response_time_score(expert),
        success_rate: success_rate_score(expert),
        case_similarity: case_similarity_for_keywords(extractor, case_keywords, &expert.id, history),
    }
}

/// Combine sub-scores into a whole match percentage (0-100)
#[inline]
pub fn calculate_match_percentage(scores: &SubScores, weights: &ScoringWeights) -> u8 {
    bounded(weights.combine(scores)).round() as u8
}

/// Share of the expert's skills that overlap the case keywords (0-100)
pub fn skill_relevance<E: KeywordExtractor + ?Sized>(extractor: &E, case: &Case, skills: &[String]) -> f64 {
    let keywords = extractor.extract(&case.search_text());
    skill_relevance_for_keywords(&keywords, skills)
}

/// Skill relevance against pre-extracted keywords
///
/// A skill matches when a keyword is contained in it or it is contained in a keyword.
pub fn skill_relevance_for_keywords(keywords: &[String], skills: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let matched = skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            keywords
                .iter()
                .any(|keyword| skill.contains(keyword.as_str()) || keyword.contains(skill.as_str()))
        })
        .count();

    (matched as f64 / skills.len() as f64) * 100.0
}

/// Free capacity of an available expert (0-100)
///
/// Busy and offline experts score zero.
#[inline]
pub fn availability_score(expert: &Expert) -> f64 {
    if !expert.is_available() {
        return 0.0;
    }

    let workload = if expert.current_workload.is_finite() {
        expert.current_workload.clamp(0.0, 1.0)
    } else {
        0.0
    };

    100.0 - workload * 100.0
}

/// Linear decay of average response time against a 30 minute ceiling (0-100)
#[inline]
pub fn response_time_score(expert: &Expert) -> f64 {
    if !expert.avg_response_time.is_finite() {
        return 0.0;
    }
    bounded(100.0 - (expert.avg_response_time / RESPONSE_TIME_CEILING_MINS) * 100.0)
}

/// Stored historical success rate (0-100)
#[inline]
pub fn success_rate_score(expert: &Expert) -> f64 {
    bounded(expert.success_rate)
}

/// Share of the expert's resolved cases that share a keyword with this case (0-100)
pub fn case_similarity_score<E: KeywordExtractor + ?Sized>(
    extractor: &E,
    case: &Case,
    expert: &Expert,
    history: &[CaseHistoryEntry],
) -> f64 {
    let keywords = extractor.extract(&case.search_text());
    case_similarity_for_keywords(extractor, &keywords, &expert.id, history)
}

/// Case similarity against pre-extracted case keywords
pub fn case_similarity_for_keywords<E: KeywordExtractor + ?Sized>(
    extractor: &E,
    case_keywords: &[String],
    expert_id: &str,
    history: &[CaseHistoryEntry],
) -> f64 {
    let mut resolved = 0usize;
    let mut similar = 0usize;

    for entry in history.iter().filter(|entry| entry.is_resolved_by(expert_id)) {
        resolved += 1;
        let shares_keyword = extractor
            .extract(&entry.search_text())
            .iter()
            .any(|keyword| case_keywords.contains(keyword));
        if shares_keyword {
            similar += 1;
        }
    }

    if resolved == 0 {
        return 0.0;
    }

    (similar as f64 / resolved as f64) * 100.0
}

/// Clamp to [0, 100], mapping non-finite values to 0
#[inline]
fn bounded(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
