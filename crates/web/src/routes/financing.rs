use actix_web::{get, post, put, web, HttpResponse};
use serde_json::json;

use crate::authentication::AdminSession;
use crate::domain::{FinancingSettingsUpdate, QuoteRequest};
use crate::error::ApiError;
use crate::store::SiteStore;

#[get("/financing")]
pub async fn get_financing_settings(
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let settings = store.financing_settings().await;
    Ok(HttpResponse::Ok().json(json!({ "settings": settings })))
}

#[put("/admin/financing")]
#[tracing::instrument(name = "Update financing settings", skip_all)]
pub async fn update_financing_settings(
    _admin: AdminSession,
    body: web::Json<FinancingSettingsUpdate>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let update = body.into_inner().validate().map_err(ApiError::Validation)?;
    let settings = store.update_financing_settings(update).await;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "settings": settings })))
}

#[post("/financing/quote")]
pub async fn quote_financing(
    body: web::Json<QuoteRequest>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let settings = store.financing_settings().await;
    Ok(HttpResponse::Ok().json(settings.quote(body.into_inner())))
}
