use crate::core::Analyzer;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse, JobsResponse};
use crate::services::ProfileStore;
use actix_web::{web, HttpResponse, Responder};
use std::str::FromStr;
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
///
/// Everything in here is read-only after startup; concurrent requests
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileStore>,
    pub analyzer: Analyzer,
}

/// Configure all analysis-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/jobs", web::get().to(list_jobs))
        .route("/analyze", web::post().to(analyze));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the configured job profiles
///
/// GET /api/v1/jobs
async fn list_jobs(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(JobsResponse {
        jobs: state.profiles.job_titles(),
    })
}

/// Analyze a resume against a configured job profile
///
/// POST /api/v1/analyze
///
/// Request body:
/// ```json
/// {
///   "resumeText": "string",
///   "job": "Senior Web Engineer",
///   "stage": "1st|2nd|final"
/// }
/// ```
async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // An unsupported stage is a client error, never silently defaulted
    let stage = match crate::models::InterviewStage::from_str(&req.stage) {
        Ok(stage) => stage,
        Err(e) => {
            tracing::info!("Rejected analyze request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid stage".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let job = match state.profiles.job(&req.job) {
        Some(job) => job,
        None => {
            tracing::info!("Unknown job profile requested: {}", req.job);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Unknown job profile".to_string(),
                message: format!(
                    "no job profile named {:?}; available: {}",
                    req.job,
                    state.profiles.job_titles().join(", ")
                ),
                status_code: 404,
            });
        }
    };

    tracing::info!(
        "Analyzing resume ({} chars) for job {:?}, stage {}",
        req.resume_text.len(),
        job.title,
        stage
    );

    let result = state
        .analyzer
        .analyze(&req.resume_text, job, state.profiles.company(), stage);

    let focus_labels: Vec<&str> = result
        .breakdown
        .interview_focus_areas
        .iter()
        .map(|c| c.label())
        .collect();
    tracing::debug!(
        "Analysis complete: overall {:.1}, recommendation {:?}, focus [{}], {} questions",
        result.breakdown.overall_score,
        result.breakdown.recommendation,
        focus_labels.join(", "),
        result.questions.len()
    );

    HttpResponse::Ok().json(AnalyzeResponse {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        analyzed_at: chrono::Utc::now(),
        result,
    })
}
