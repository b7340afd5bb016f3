use crate::models::ScoredExpert;

/// Ceiling for reported confidence; the engine never claims certainty
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Maximum number of key factors reported
pub const MAX_KEY_FACTORS: usize = 5;

/// Skills of the top expert listed as key factors
const KEY_SKILLS: usize = 3;

/// Aggregate confidence (0-0.95) over a ranked, qualified expert list
///
/// Averages the mean and the top match percentage, scaled to 0-1.
pub fn calculate_confidence(qualified: &[ScoredExpert]) -> f64 {
    let Some(top) = qualified.first() else {
        return 0.0;
    };

    let total: f64 = qualified.iter().map(|e| e.match_percentage as f64).sum();
    let mean = total / qualified.len() as f64;

    ((mean + top.match_percentage as f64) / 200.0).min(MAX_CONFIDENCE)
}

/// Short descriptions of why the top-ranked expert was chosen
pub fn key_factors(qualified: &[ScoredExpert]) -> Vec<String> {
    let Some(top) = qualified.first() else {
        return Vec::new();
    };

    let mut factors: Vec<String> = top
        .expert
        .skills
        .iter()
        .take(KEY_SKILLS)
        .map(|skill| format!("{} expertise", skill))
        .collect();

    if top.expert.is_available() {
        factors.push("Available for immediate response".to_string());
    }
    if top.expert.success_rate > 90.0 {
        factors.push("High success rate with similar issues".to_string());
    }
    if top.scores.case_similarity > 50.0 {
        factors.push("Recent similar case resolution".to_string());
    }

    factors.truncate(MAX_KEY_FACTORS);
    factors
}
