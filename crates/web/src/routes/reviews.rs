use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::authentication::AdminSession;
use crate::domain::{NewReview, ReviewSubmission, ReviewUpdate};
use crate::error::ApiError;
use crate::store::SiteStore;

#[get("/reviews")]
pub async fn list_approved_reviews(
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.reviews(true).await))
}

#[get("/admin/reviews")]
pub async fn list_all_reviews(
    _admin: AdminSession,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.reviews(false).await))
}

#[post("/reviews")]
#[tracing::instrument(
    name = "Submit review",
    skip_all,
    fields(vehicle_id = body.vehicle_id, rating = body.rating)
)]
pub async fn submit_review(
    body: web::Json<ReviewSubmission>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let review = NewReview::try_from(body.into_inner()).map_err(ApiError::Validation)?;
    let review = store.insert_review(review).await;
    Ok(HttpResponse::Created().json(json!({ "success": true, "review": review })))
}

#[put("/admin/reviews/{review_id}")]
#[tracing::instrument(name = "Moderate review", skip_all, fields(review_id = %review_id))]
pub async fn update_review(
    _admin: AdminSession,
    review_id: web::Path<i64>,
    body: web::Json<ReviewUpdate>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    let review = store
        .update_review(review_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "review": review })))
}

#[delete("/admin/reviews/{review_id}")]
#[tracing::instrument(name = "Delete review", skip_all, fields(review_id = %review_id))]
pub async fn delete_review(
    _admin: AdminSession,
    review_id: web::Path<i64>,
    store: web::Data<SiteStore>,
) -> Result<HttpResponse, ApiError> {
    store.delete_review(review_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Review deleted." })))
}
