use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use skillmatch::config::Settings;
use skillmatch::core::Matcher;
use skillmatch::routes::{self, AppState};
use skillmatch::services::{SkillExtractor, SupabaseClient, SupabaseTables, WebhookNotifier};
use std::sync::Arc;
use tracing::{error, info, warn};

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
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Skillmatch candidate matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    if settings.supabase.url.is_empty() {
        warn!("Supabase URL is not configured; candidate fetches and email inserts will fail");
    }
    if settings.openai.api_key.is_empty() {
        warn!("OpenAI API key is not configured; skill extraction will fail");
    }

    // Initialize the Supabase client
    let tables = SupabaseTables {
        interviews: settings.tables.interviews,
        incoming_emails: settings.tables.incoming_emails,
    };

    let supabase = Arc::new(SupabaseClient::new(
        settings.supabase.url,
        settings.supabase.service_key,
        tables,
    ));

    info!("Supabase client initialized");

    // Initialize the skill extractor
    let extractor = Arc::new(SkillExtractor::new(
        settings.openai.api_base,
        settings.openai.api_key,
        settings.openai.model,
    ));

    // Initialize the return-webhook notifier
    let notifier = Arc::new(WebhookNotifier::new(settings.notify.return_url.clone()));
    match settings.notify.return_url {
        Some(url) => info!("Webhook relay configured for {}", url),
        None => info!("Webhook relay disabled (no return URL configured)"),
    }

    // Build application state
    let app_state = AppState {
        supabase,
        extractor,
        notifier,
        matcher: Matcher::new(),
        page_size: settings.fetch.page_size,
    };

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
