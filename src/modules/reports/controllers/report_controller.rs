use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::reports::models::ReportRequest;
use crate::modules::reports::repositories::AnalyticsStore;
use crate::modules::reports::services::ReportService;

/// POST /reports
///
/// Accepts `{"type", "restaurant_id"?, "date_from"?, "date_to"?}` and returns
/// the matching report document verbatim. A report is all-or-nothing: any
/// failure, validation or upstream, surfaces here as a single
/// `{"error": ...}` body. This is the only point translating `AppError` into
/// the wire error shape.
pub async fn generate_report(
    store: web::Data<dyn AnalyticsStore>,
    request: web::Json<ReportRequest>,
) -> HttpResponse {
    let service = ReportService::new(store.into_inner());

    match service.generate(request.into_inner()).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!("Report generation failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reports", web::post().to(generate_report));
}
