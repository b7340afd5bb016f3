use crate::models::{Availability, CaseHistoryEntry, CaseStatus, Expert, Severity};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn expert(
    id: &str,
    name: &str,
    title: &str,
    availability: Availability,
    success_rate: f64,
    cases_resolved: u32,
    avg_response_time: f64,
    current_workload: f64,
    experience_years: u32,
    timezone: &str,
) -> Expert {
    Expert {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        skills: Vec::new(),
        specializations: Vec::new(),
        experience_years,
        certifications: Vec::new(),
        timezone: Some(timezone.to_string()),
        availability,
        current_workload,
        avg_response_time,
        success_rate,
        cases_resolved,
        recent_cases: Vec::new(),
    }
}

/// Built-in expert roster
pub fn default_experts() -> Vec<Expert> {
    vec![
        Expert {
            skills: strings(&["PostgreSQL", "Connection Pooling", "Performance Tuning", "Database Architecture", "Query Optimization", "Monitoring"]),
            specializations: strings(&["Database Management", "Performance Optimization", "System Architecture"]),
            certifications: strings(&["AWS Database Specialty", "PostgreSQL Professional"]),
            recent_cases: strings(&["CASE-2024-089", "CASE-2024-092", "CASE-2024-095"]),
            ..expert("exp-001", "Dr. Michael Chen", "Senior Database Architect", Availability::Available, 96.0, 247, 5.0, 0.3, 12, "PST")
        },
        Expert {
            skills: strings(&["Infrastructure", "Database Scaling", "Load Balancing", "Monitoring", "AWS RDS", "Docker"]),
            specializations: strings(&["DevOps", "Infrastructure", "Cloud Architecture"]),
            certifications: strings(&["AWS Solutions Architect", "Kubernetes Administrator"]),
            recent_cases: strings(&["CASE-2024-087", "CASE-2024-090"]),
            ..expert("exp-002", "Elena Rodriguez", "DevOps Engineering Lead", Availability::Busy, 92.0, 189, 12.0, 0.8, 8, "EST")
        },
        Expert {
            skills: strings(&["API Development", "Database Integration", "Connection Management", "Troubleshooting", "Node.js", "Redis"]),
            specializations: strings(&["Backend Development", "System Integration", "API Design"]),
            certifications: strings(&["Node.js Certified Developer", "Redis Professional"]),
            recent_cases: strings(&["CASE-2024-088", "CASE-2024-091"]),
            ..expert("exp-003", "James Wilson", "Backend Systems Specialist", Availability::Available, 89.0, 156, 8.0, 0.4, 6, "CST")
        },
        Expert {
            skills: strings(&["Database Administration", "Connection Pooling", "Performance Tuning", "Backup & Recovery", "Security", "PostgreSQL"]),
            specializations: strings(&["Database Administration", "Performance Optimization", "Security"]),
            certifications: strings(&["Oracle DBA", "PostgreSQL Professional", "CISSP"]),
            recent_cases: strings(&["CASE-2024-086", "CASE-2024-089", "CASE-2024-093"]),
            ..expert("exp-004", "Dr. Sarah Kim", "Senior Database Administrator", Availability::Available, 94.0, 203, 6.0, 0.2, 10, "PST")
        },
        Expert {
            skills: strings(&["Cloud Infrastructure", "Database Scaling", "AWS RDS", "Load Balancing", "Monitoring", "Terraform"]),
            specializations: strings(&["Cloud Architecture", "Infrastructure as Code", "DevOps"]),
            certifications: strings(&["AWS Solutions Architect", "Kubernetes Administrator", "Terraform Associate"]),
            recent_cases: strings(&["CASE-2024-085", "CASE-2024-088", "CASE-2024-092"]),
            ..expert("exp-005", "Alex Thompson", "Cloud Infrastructure Engineer", Availability::Available, 91.0, 178, 10.0, 0.5, 7, "EST")
        },
    ]
}

fn resolved_case(
    id: &str,
    title: &str,
    module: &str,
    severity: Severity,
    resolved_by: &str,
    resolution_time: u32,
    skills: &[&str],
) -> CaseHistoryEntry {
    CaseHistoryEntry {
        id: id.to_string(),
        title: title.to_string(),
        module: module.to_string(),
        severity,
        resolved_by: Some(resolved_by.to_string()),
        resolution_time: Some(resolution_time),
        skills: strings(skills),
        status: CaseStatus::Resolved,
        created_at: None,
    }
}

/// Built-in history of resolved cases
pub fn default_history() -> Vec<CaseHistoryEntry> {
    vec![
        resolved_case(
            "CASE-2024-089",
            "Database Connection Pool Exhaustion",
            "Database Management",
            Severity::High,
            "exp-001",
            45,
            &["Connection Pooling", "PostgreSQL", "Performance Tuning"],
        ),
        resolved_case(
            "CASE-2024-087",
            "Database Scaling Issues",
            "Infrastructure",
            Severity::Medium,
            "exp-002",
            120,
            &["Database Scaling", "AWS RDS", "Load Balancing"],
        ),
        resolved_case(
            "CASE-2024-088",
            "API Database Connection Timeout",
            "Backend Systems",
            Severity::High,
            "exp-003",
            60,
            &["Database Integration", "Connection Management", "Troubleshooting"],
        ),
    ]
}
