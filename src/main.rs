use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use hirelens_algo::config::Settings;
use hirelens_algo::core::Analyzer;
use hirelens_algo::routes::{self, analyze::AppState};
use hirelens_algo::services::{load_question_bank, load_vocabulary, validate_scoring, ProfileStore};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting HireLens Algo analysis service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Validate scoring configuration before anything can score with it
    let weights = settings.scoring.weights.clone().into();
    let thresholds = settings.scoring.thresholds.clone().into();
    if let Err(e) = validate_scoring(&weights, &thresholds) {
        error!("Invalid scoring configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
    }

    // Load read-only reference data
    let profiles = match ProfileStore::from_path(&settings.data.profiles_path) {
        Ok(store) => {
            info!(
                "Loaded company profile {:?} and {} job profile(s)",
                store.company().name,
                store.len()
            );
            Arc::new(store)
        }
        Err(e) => {
            error!("Failed to load profiles from {}: {}", settings.data.profiles_path, e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    let bank = match load_question_bank(&settings.data.question_bank_path) {
        Ok(bank) => {
            info!("Loaded question bank with {} question(s)", bank.len());
            Arc::new(bank)
        }
        Err(e) => {
            error!(
                "Failed to load question bank from {}: {}",
                settings.data.question_bank_path, e
            );
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    let vocabulary = match load_vocabulary(settings.data.vocabulary_path.as_deref()) {
        Ok(vocabulary) => {
            info!(
                "Extractor vocabulary ready ({} skills, {} certifications)",
                vocabulary.skills.len(),
                vocabulary.certifications.len()
            );
            vocabulary
        }
        Err(e) => {
            error!("Failed to load extractor vocabulary: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    // Initialize the analyzer with the configured scoring parameters
    let analyzer = Analyzer::new(vocabulary, weights, thresholds, bank);

    info!("Analyzer initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState { profiles, analyzer };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
