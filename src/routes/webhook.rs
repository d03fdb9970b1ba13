use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, MatchResponse};
use crate::report;
use crate::services::{SkillExtractor, SupabaseClient, WebhookNotifier};
use actix_multipart::Multipart;
use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use futures_util::TryStreamExt;
use std::collections::BTreeSet;
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub extractor: Arc<SkillExtractor>,
    pub notifier: Arc<WebhookNotifier>,
    pub matcher: Matcher,
    pub page_size: usize,
}

/// Configure the webhook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/webhook", web::post().to(process_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.supabase.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: 400,
    })
}

fn internal_error(error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: 500,
    })
}

/// Match webhook endpoint
///
/// POST /api/webhook
///
/// Accepts either a JSON body:
/// ```json
/// {
///   "job_description": "string",
///   "extra_notes": "string"
/// }
/// ```
/// or a multipart form with a `file` PDF part (plus an optional
/// `extra_notes` part). Runs the full pipeline: skill extraction,
/// paginated candidate fetch, matching, report rendering, and a
/// fire-and-forget relay of the response payload.
async fn process_match(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let (job_description, extra_notes) = if content_type.starts_with("multipart/form-data") {
        match read_upload(&req, payload).await {
            Ok(input) => input,
            Err(response) => return response,
        }
    } else {
        match read_json(payload).await {
            Ok(input) => input,
            Err(response) => return response,
        }
    };

    // Extract required skills from the job description
    let combined = format!("{}\n\n{}", job_description, extra_notes);
    let skills = match state.extractor.extract_skills(&combined).await {
        Ok(skills) => skills,
        Err(e) => {
            tracing::error!("Skill extraction failed: {}", e);
            return internal_error("Failed to extract skills", e.to_string());
        }
    };

    if skills.is_empty() {
        return bad_request(
            "No skills extracted",
            "No skills could be extracted from the job description",
        );
    }

    tracing::info!("Extracted {} required skills", skills.len());

    // Fetch the candidate pool and run the matcher
    let candidates = state.supabase.fetch_all_candidates(state.page_size).await;
    let required: BTreeSet<String> = skills.iter().cloned().collect();
    let outcome = state.matcher.match_candidates(&required, candidates);

    tracing::info!(
        "Matched {} of {} candidates",
        outcome.matches.len(),
        outcome.total_candidates
    );

    // Render the report
    let pdf = match report::render_report(&outcome.matches) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Report rendering failed: {}", e);
            return internal_error("Failed to generate report", e.to_string());
        }
    };

    let response = MatchResponse {
        success: true,
        candidates: outcome.matches,
        pdf_base64: BASE64.encode(&pdf),
        extracted_skills: skills,
        processed_at: chrono::Utc::now(),
    };

    // Relay to the return webhook; failures are logged, never surfaced.
    state.notifier.dispatch(&response);

    HttpResponse::Ok().json(response)
}

/// Read the JSON request variant.
async fn read_json(payload: web::Payload) -> Result<(String, String), HttpResponse> {
    let body = payload
        .to_bytes()
        .await
        .map_err(|e| bad_request("Invalid body", e.to_string()))?;

    let request: MatchRequest = serde_json::from_slice(&body)
        .map_err(|e| bad_request("Invalid JSON", format!("Invalid JSON: {}", e)))?;

    if request.validate().is_err() || request.job_description.trim().is_empty() {
        return Err(bad_request(
            "Missing job description",
            "job_description is required",
        ));
    }

    Ok((
        request.job_description,
        request.extra_notes.unwrap_or_default(),
    ))
}

/// Read the multipart upload variant and extract the job description text
/// from the uploaded PDF.
async fn read_upload(
    req: &HttpRequest,
    payload: web::Payload,
) -> Result<(String, String), HttpResponse> {
    let mut multipart = Multipart::new(req.headers(), payload);

    let mut pdf_bytes: Option<Vec<u8>> = None;
    let mut extra_notes = String::new();

    while let Some(mut field) = multipart
        .try_next()
        .await
        .map_err(|e| bad_request("Invalid multipart body", e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                pdf_bytes = Some(collect_field(&mut field).await?);
            }
            Some("extra_notes") => {
                let bytes = collect_field(&mut field).await?;
                extra_notes = String::from_utf8_lossy(&bytes).into_owned();
            }
            _ => {
                // Unknown parts still have to be drained to advance the stream.
                collect_field(&mut field).await?;
            }
        }
    }

    let pdf_bytes = pdf_bytes
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| bad_request("Missing file", "No PDF file provided"))?;

    let text = pdf_extract::extract_text_from_mem(&pdf_bytes).map_err(|e| {
        tracing::warn!("PDF text extraction failed: {}", e);
        bad_request(
            "Unreadable PDF",
            "Failed to extract text from PDF",
        )
    })?;

    if text.trim().is_empty() {
        return Err(bad_request(
            "Empty PDF",
            "Failed to extract text from PDF",
        ));
    }

    Ok((text, extra_notes))
}

async fn collect_field(field: &mut actix_multipart::Field) -> Result<Vec<u8>, HttpResponse> {
    let mut data = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| bad_request("Invalid multipart field", e.to_string()))?
    {
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_error_helpers_carry_status() {
        let response = bad_request("Missing file", "No PDF file provided");
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let response = internal_error("boom", "details");
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
