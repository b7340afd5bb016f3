use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    CaseRequest, ErrorResponse, EscalationResponse, ExpertHistoryResponse, ExpertListResponse,
    HealthResponse, MatchExpertsRequest, RecordCaseResponse, UpdateAvailabilityRequest,
};
use crate::services::{ExpertRegistry, SharedRegistry};
use crate::core::Matcher;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(registry: ExpertRegistry) -> Self {
        Self {
            registry: registry.into_shared(),
            matcher: Matcher::new(),
        }
    }
}

/// Configure all expert-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::post().to(find_matches))
        .route("/matches/escalate", web::post().to(escalate))
        .route("/experts", web::get().to(list_experts))
        .route("/experts/{id}", web::get().to(get_expert))
        .route("/experts/{id}/availability", web::put().to(update_availability))
        .route("/experts/{id}/request", web::post().to(request_expert))
        .route("/experts/{id}/history", web::get().to(expert_history))
        .route("/cases", web::post().to(record_case));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn expert_not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Expert not found".to_string(),
        message: format!("No expert with id '{}'", id),
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let registry = state.registry.read().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        expert_count: registry.len(),
        history_count: registry.history().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match experts endpoint
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "id": "CASE-2024-001",
///   "title": "Database Connection Timeout",
///   "description": "string",
///   "module": "Database Management",
///   "severity": "low|medium|high|critical",
///   "recordHistory": true
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchExpertsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return validation_error(errors);
    }

    let MatchExpertsRequest { case, record_history } = req.into_inner();
    let case = case.into_case();

    tracing::info!("Matching experts for case {} (severity {:?})", case.id, case.severity);

    let result = if record_history {
        // Record and match under one guard so the match sees its own entry
        let mut registry = state.registry.write().await;
        registry.record_case(&case);
        state.matcher.match_experts(&case, &registry)
    } else {
        let registry = state.registry.read().await;
        state.matcher.match_experts(&case, &registry)
    };

    tracing::info!(
        "Returning {} experts for case {} (from {} evaluated, confidence {:.2}, {}ms)",
        result.experts.len(),
        case.id,
        result.experts_evaluated,
        result.overall_confidence,
        result.analysis_time_ms
    );

    HttpResponse::Ok().json(result)
}

/// Escalate a case to every qualified, available expert
///
/// POST /api/v1/matches/escalate
async fn escalate(
    state: web::Data<AppState>,
    req: web::Json<CaseRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let case = req.into_inner().into_case();
    let (match_result, escalated) = {
        let mut registry = state.registry.write().await;
        state.matcher.escalate(&case, &mut registry)
    };

    HttpResponse::Ok().json(EscalationResponse {
        case_id: case.id,
        escalated,
        match_result,
    })
}

/// List all experts
///
/// GET /api/v1/experts
async fn list_experts(state: web::Data<AppState>) -> impl Responder {
    let registry = state.registry.read().await;
    let experts = registry.list_experts().to_vec();

    HttpResponse::Ok().json(ExpertListResponse {
        total: experts.len(),
        experts,
    })
}

/// Get a single expert
///
/// GET /api/v1/experts/{id}
async fn get_expert(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let registry = state.registry.read().await;

    match registry.get_expert(&id) {
        Some(expert) => HttpResponse::Ok().json(expert),
        None => expert_not_found(&id),
    }
}

/// Update an expert's availability
///
/// PUT /api/v1/experts/{id}/availability
///
/// Request body:
/// ```json
/// { "availability": "available|busy|offline" }
/// ```
///
/// Unknown ids are accepted and ignored.
async fn update_availability(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateAvailabilityRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let updated = state
        .registry
        .write()
        .await
        .set_availability(&id, req.availability);

    if updated {
        tracing::info!("Expert {} is now {}", id, req.availability);
    }

    HttpResponse::NoContent().finish()
}

/// Request an expert for a case, marking them busy
///
/// POST /api/v1/experts/{id}/request
///
/// Offline experts cannot be requested (409).
async fn request_expert(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let mut registry = state.registry.write().await;

    match registry.get_expert(&id).map(|e| e.is_eligible()) {
        None => return expert_not_found(&id),
        Some(false) => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Expert unavailable".to_string(),
                message: format!("Expert '{}' is offline and cannot be requested", id),
                status_code: 409,
            });
        }
        Some(true) => {}
    }

    match registry.request_expert(&id) {
        Some(expert) => {
            tracing::info!("Expert {} requested", id);
            HttpResponse::Ok().json(expert)
        }
        None => expert_not_found(&id),
    }
}

/// Cases resolved by an expert
///
/// GET /api/v1/experts/{id}/history
async fn expert_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let registry = state.registry.read().await;
    let cases = registry.history_for(&id).into_iter().cloned().collect();

    HttpResponse::Ok().json(ExpertHistoryResponse {
        expert_id: id,
        cases,
    })
}

/// Add a case to history
///
/// POST /api/v1/cases
async fn record_case(
    state: web::Data<AppState>,
    req: web::Json<CaseRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let case = req.into_inner().into_case();
    let history_count = {
        let mut registry = state.registry.write().await;
        registry.record_case(&case);
        registry.history().len()
    };

    tracing::info!("Recorded case {} in history", case.id);

    HttpResponse::Created().json(RecordCaseResponse {
        case_id: case.id,
        history_count,
    })
}
