use crate::models::{CollectEmailRequest, CollectEmailResponse, ErrorResponse};
use crate::routes::webhook::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure the email collector routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/email-collector", web::post().to(collect_email));
}

/// Email collector endpoint
///
/// POST /api/email-collector
///
/// Request body:
/// ```json
/// {
///   "email": "string"
/// }
/// ```
async fn collect_email(
    state: web::Data<AppState>,
    req: web::Json<CollectEmailRequest>,
) -> impl Responder {
    if req.validate().is_err() || req.email.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing email".to_string(),
            message: "Email is required".to_string(),
            status_code: 400,
        });
    }

    match state
        .supabase
        .insert_email(req.email.trim(), chrono::Utc::now())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(CollectEmailResponse { success: true }),
        Err(e) => {
            tracing::error!("Failed to save email: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save email".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
