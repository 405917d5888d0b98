use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;

use crate::authentication::AdminSession;
use crate::domain::NewAnalyticsEvent;
use crate::error::ApiError;
use crate::store::SiteStore;

#[post("/analytics")]
pub async fn record_event(
    body: web::Json<NewAnalyticsEvent>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let event = body.into_inner().validate().map_err(ApiError::Validation)?;
    store.record_event(event).await;
    Ok(HttpResponse::Created().json(json!({ "success": true, "message": "Event recorded." })))
}

#[get("/admin/analytics")]
pub async fn list_events(
    _admin: AdminSession,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.events().await))
}

#[delete("/admin/analytics")]
#[tracing::instrument(name = "Reset analytics", skip_all)]
pub async fn reset_events(
    _admin: AdminSession,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let removed = store.reset_events().await;
    tracing::info!(removed, "Analytics reset");
    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Analytics reset." })))
}
