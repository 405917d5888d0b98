use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::json;

use crate::authentication::AdminSession;
use crate::domain::{DisplayOrder, SaveVehicle};
use crate::error::ApiError;
use crate::store::SiteStore;

#[get("/vehicles")]
pub async fn list_vehicles(store: web::Data<SiteStore>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.vehicles().await))
}

#[post("/admin/vehicles")]
#[tracing::instrument(name = "Save vehicle", skip_all, fields(vehicle_id = ?body.id))]
pub async fn save_vehicle(
    _admin: AdminSession,
    body: web::Json<SaveVehicle>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let mut request = body.into_inner();
    request.details = request.details.validate().map_err(ApiError::Validation)?;

    let vehicle = store.save_vehicle(request).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "vehicle": vehicle })))
}

#[delete("/admin/vehicles/{vehicle_id}")]
#[tracing::instrument(name = "Delete vehicle", skip_all, fields(vehicle_id = %vehicle_id))]
pub async fn delete_vehicle(
    _admin: AdminSession,
    vehicle_id: web::Path<i64>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let message = if store.delete_vehicle(vehicle_id.into_inner()).await {
        "Vehicle and associated analytics deleted."
    } else {
        "Vehicle already deleted."
    };
    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": message })))
}

#[patch("/admin/vehicles/order")]
#[tracing::instrument(name = "Reorder vehicles", skip_all, fields(count = body.len()))]
pub async fn reorder_vehicles(
    _admin: AdminSession,
    body: web::Json<Vec<DisplayOrder>>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    store.reorder_vehicles(&body).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
