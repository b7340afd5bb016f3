// Integration tests for Expert Match

use expert_match::core::{Matcher, QUALIFICATION_THRESHOLD};
use expert_match::models::{Availability, Case, CaseHistoryEntry, CaseStatus, MatchResult, Severity};
use expert_match::services::{seed, ExpertRegistry, RegistryError};
use std::io::Write;

fn database_timeout_case() -> Case {
    Case {
        id: "CASE-2024-001".to_string(),
        title: "Database Connection Timeout".to_string(),
        description: "Error logs show connection pool exhaustion and timeout errors during peak hours."
            .to_string(),
        module: "Database Management".to_string(),
        severity: Severity::High,
    }
}

fn printer_case() -> Case {
    Case {
        id: "CASE-2024-002".to_string(),
        title: "Printer out of toner".to_string(),
        description: "The office printer on floor 3 is out of toner.".to_string(),
        module: "Facilities".to_string(),
        severity: Severity::Low,
    }
}

fn ranking(result: &MatchResult) -> Vec<(&str, u8)> {
    result
        .experts
        .iter()
        .map(|e| (e.expert.id.as_str(), e.match_percentage))
        .collect()
}

#[test]
fn test_database_timeout_ranks_connection_pooling_expert_first() {
    let registry = ExpertRegistry::seeded();
    let result = Matcher::new().match_experts(&database_timeout_case(), &registry);

    assert_eq!(
        ranking(&result),
        vec![("exp-001", 67), ("exp-004", 63), ("exp-003", 62)]
    );

    let top = result.top().unwrap();
    assert!(top.expert.skills.iter().any(|s| s == "Connection Pooling"));
    assert!(top.expert.skills.iter().any(|s| s == "PostgreSQL"));
    assert!((top.scores.skill_relevance - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(top.scores.case_similarity, 100.0);

    assert_eq!(result.experts_evaluated, 5);
    assert!((result.overall_confidence - 0.655).abs() < 1e-9);
    assert_eq!(
        result.key_factors,
        vec![
            "PostgreSQL expertise",
            "Connection Pooling expertise",
            "Performance Tuning expertise",
            "Available for immediate response",
            "High success rate with similar issues",
        ]
    );
}

#[test]
fn test_unrelated_case_has_no_qualified_experts() {
    let registry = ExpertRegistry::seeded();
    let matcher = Matcher::new();
    let case = printer_case();

    for expert in registry.list_experts() {
        assert_eq!(
            expert_match::core::skill_relevance(matcher.extractor(), &case, &expert.skills),
            0.0
        );
    }

    let result = matcher.match_experts(&case, &registry);
    assert!(result.experts.is_empty());
    assert_eq!(result.overall_confidence, 0.0);
    assert!(result.key_factors.is_empty());
    assert_eq!(result.experts_evaluated, 5);
}

#[test]
fn test_offline_expert_drops_out() {
    let mut registry = ExpertRegistry::seeded();
    let matcher = Matcher::new();
    let case = database_timeout_case();

    registry.set_availability("exp-001", Availability::Offline);
    let result = matcher.match_experts(&case, &registry);

    // 67 - 14 availability points = 53, below the threshold
    assert_eq!(ranking(&result), vec![("exp-004", 63), ("exp-003", 62)]);
    assert!((result.overall_confidence - 0.6275).abs() < 1e-9);
    assert_eq!(result.key_factors[0], "Database Administration expertise");
}

#[test]
fn test_recorded_case_does_not_change_scores() {
    let mut registry = ExpertRegistry::seeded();
    let matcher = Matcher::new();
    let case = database_timeout_case();

    let before = matcher.match_experts(&case, &registry);
    registry.record_case(&case);
    let after = matcher.match_experts(&case, &registry);

    assert_eq!(registry.history().len(), 4);
    assert_eq!(registry.history()[3].status, CaseStatus::Open);
    assert_eq!(ranking(&before), ranking(&after));
    for (b, a) in before.experts.iter().zip(&after.experts) {
        assert_eq!(b.scores, a.scores);
    }
}

#[test]
fn test_resolved_history_lifts_similarity() {
    let mut history = seed::default_history();
    history.push(CaseHistoryEntry {
        id: "CASE-2024-093".to_string(),
        title: "Connection pool leak".to_string(),
        module: "Database Management".to_string(),
        severity: Severity::Critical,
        resolved_by: Some("exp-004".to_string()),
        resolution_time: Some(30),
        skills: vec!["Connection Pooling".to_string()],
        status: CaseStatus::Resolved,
        created_at: None,
    });
    let registry = ExpertRegistry::new(seed::default_experts(), history);

    let result = Matcher::new().match_experts(&database_timeout_case(), &registry);

    // exp-004 gains the full 5 similarity points: 63 -> 68
    assert_eq!(ranking(&result)[0], ("exp-004", 68));
    assert_eq!(ranking(&result)[1], ("exp-001", 67));
}

#[test]
fn test_matching_is_idempotent() {
    let registry = ExpertRegistry::seeded();
    let matcher = Matcher::new();
    let case = database_timeout_case();

    let mut first = matcher.match_experts(&case, &registry);
    let mut second = matcher.match_experts(&case, &registry);
    first.analysis_time_ms = 0;
    second.analysis_time_ms = 0;

    assert_eq!(first, second);
}

#[test]
fn test_result_invariants_across_cases() {
    let registry = ExpertRegistry::seeded();
    let matcher = Matcher::new();
    let titles = [
        "API gateway timeout",
        "AWS infrastructure scaling",
        "Oracle administration backlog",
        "Monitoring dashboards blank",
        "Nothing relevant here",
    ];

    for title in titles {
        let case = Case {
            id: "CASE-P".to_string(),
            title: title.to_string(),
            description: String::new(),
            module: String::new(),
            severity: Severity::Medium,
        };
        let result = matcher.match_experts(&case, &registry);

        assert_eq!(result.experts_evaluated, registry.len());
        assert!((0.0..=0.95).contains(&result.overall_confidence));
        assert!(result.key_factors.len() <= 5);
        assert!(result.experts.iter().all(|e| e.match_percentage >= QUALIFICATION_THRESHOLD));
        assert!(result
            .experts
            .windows(2)
            .all(|w| w[0].match_percentage >= w[1].match_percentage));
    }
}

#[test]
fn test_escalation_requests_available_qualified_experts() {
    let mut registry = ExpertRegistry::seeded();
    let (result, escalated) = Matcher::new().escalate(&database_timeout_case(), &mut registry);

    assert_eq!(result.experts.len(), 3);
    let ids: Vec<&str> = escalated.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["exp-001", "exp-004", "exp-003"]);
    for id in ids {
        assert_eq!(registry.get_expert(id).unwrap().availability, Availability::Busy);
    }
    // Not qualified, left untouched
    assert_eq!(registry.get_expert("exp-005").unwrap().availability, Availability::Available);
}

#[test]
fn test_registry_from_seed_file() {
    let registry = ExpertRegistry::from_seed_file("config/seed.toml").unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.history_for("exp-102").len(), 1);

    let case = Case {
        id: "CASE-S".to_string(),
        title: "Monitoring gaps on EKS".to_string(),
        description: "aws alarms missing".to_string(),
        module: "Infrastructure".to_string(),
        severity: Severity::High,
    };
    let result = Matcher::new().match_experts(&case, &registry);
    assert_eq!(result.top().map(|e| e.expert.id.as_str()), Some("exp-101"));
}

#[test]
fn test_registry_seed_file_errors() {
    let missing = ExpertRegistry::from_seed_file("config/does-not-exist.toml");
    assert!(matches!(missing, Err(RegistryError::Io(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[[experts]]\nid = \"x\"\nname = \"X\"\ntitle = \"T\"\navailability = \"available\"\navgResponseTime = 0.0"
    )
    .unwrap();

    let invalid = ExpertRegistry::from_seed_file(file.path());
    assert!(matches!(invalid, Err(RegistryError::InvalidExpert { .. })));
}
