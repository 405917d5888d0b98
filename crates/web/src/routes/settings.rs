use actix_web::{get, put, web, HttpResponse};
use serde_json::json;

use crate::authentication::AdminSession;
use crate::error::ApiError;
use crate::store::SiteStore;

#[get("/settings/{key}")]
pub async fn get_setting(
    key: web::Path<String>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let key = key.into_inner();
    match store.setting(&key).await {
        Some(value) => Ok(HttpResponse::Ok().json(value)),
        None => Err(ApiError::NotFound(format!(
            "Settings for key '{}' not found.",
            key
        ))),
    }
}

#[put("/admin/settings/{key}")]
#[tracing::instrument(name = "Update setting", skip_all, fields(key = %key))]
pub async fn update_setting(
    _admin: AdminSession,
    key: web::Path<String>,
    value: web::Json<serde_json::Value>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let entry = store.put_setting(key.into_inner(), value.into_inner()).await;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "settings": entry })))
}
