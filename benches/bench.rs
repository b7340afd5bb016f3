// Criterion benchmarks for Expert Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expert_match::core::{keywords::{KeywordExtractor, VocabularyExtractor}, Matcher};
use expert_match::models::{Availability, Case, CaseHistoryEntry, CaseStatus, Expert, Severity};
use expert_match::services::ExpertRegistry;

const SKILL_POOL: &[&str] = &[
    "PostgreSQL", "Connection Pooling", "Performance Tuning", "Monitoring", "AWS RDS",
    "API Development", "Load Balancing", "Terraform", "Redis", "Troubleshooting",
];

fn create_expert(id: usize) -> Expert {
    Expert {
        id: format!("exp-{:04}", id),
        name: format!("Expert {}", id),
        title: "Engineer".to_string(),
        skills: (0..6).map(|i| SKILL_POOL[(id + i) % SKILL_POOL.len()].to_string()).collect(),
        specializations: vec![],
        experience_years: (id % 15) as u32,
        certifications: vec![],
        timezone: None,
        availability: match id % 3 {
            0 => Availability::Available,
            1 => Availability::Busy,
            _ => Availability::Offline,
        },
        current_workload: (id % 10) as f64 / 10.0,
        avg_response_time: 2.0 + (id % 25) as f64,
        success_rate: 70.0 + (id % 30) as f64,
        cases_resolved: id as u32,
        recent_cases: vec![],
    }
}

fn create_registry(experts: usize, history_per_expert: usize) -> ExpertRegistry {
    let roster: Vec<Expert> = (0..experts).map(create_expert).collect();
    let history = roster
        .iter()
        .flat_map(|expert| {
            (0..history_per_expert).map(move |i| CaseHistoryEntry {
                id: format!("{}-case-{}", expert.id, i),
                title: if i % 2 == 0 { "Database connection pool exhaustion" } else { "API gateway latency" }.to_string(),
                module: "Backend Systems".to_string(),
                severity: Severity::High,
                resolved_by: Some(expert.id.clone()),
                resolution_time: Some(60),
                skills: vec![],
                status: CaseStatus::Resolved,
                created_at: None,
            })
        })
        .collect();

    ExpertRegistry::new(roster, history)
}

fn create_case() -> Case {
    Case {
        id: "CASE-BENCH".to_string(),
        title: "Database Connection Timeout".to_string(),
        description: "Connection pool exhaustion during peak hours".to_string(),
        module: "Database Management".to_string(),
        severity: Severity::High,
    }
}

fn bench_keyword_extraction(c: &mut Criterion) {
    let extractor = VocabularyExtractor::default();
    let text = create_case().search_text();

    c.bench_function("keyword_extraction", |b| {
        b.iter(|| extractor.extract(black_box(&text)));
    });
}

fn bench_seeded_match(c: &mut Criterion) {
    let matcher = Matcher::new();
    let registry = ExpertRegistry::seeded();
    let case = create_case();

    c.bench_function("match_seeded_roster", |b| {
        b.iter(|| matcher.match_experts(black_box(&case), black_box(&registry)));
    });
}

fn bench_roster_sizes(c: &mut Criterion) {
    let matcher = Matcher::new();
    let case = create_case();
    let mut group = c.benchmark_group("match_experts");

    for size in [10usize, 100, 500] {
        let registry = create_registry(size, 5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| matcher.match_experts(black_box(&case), registry));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_keyword_extraction, bench_seeded_match, bench_roster_sizes);
criterion_main!(benches);
