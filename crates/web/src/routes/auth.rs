use actix_web::{post, web, HttpResponse};
use anyhow::anyhow;
use chrono::Utc;
use credential::{AdminClaims, CredentialSigner};
use secrecy::{ExposeSecret, Secret};

use crate::error::ApiError;
use crate::startup::AdminPassword;

#[derive(serde::Deserialize)]
pub struct LoginForm {
    password: Secret<String>,
}

#[derive(serde::Serialize)]
struct LoginResponse {
    success: bool,
    token: String,
}

/// Exchange the admin password for a signed credential.
#[post("/auth")]
#[tracing::instrument(name = "Admin login", skip(form, signer, admin_password))]
pub async fn login(
    form: web::Json<LoginForm>,
    signer: web::Data<CredentialSigner>,
    admin_password: web::Data<AdminPassword>,
) -> Result<HttpResponse, ApiError> {
    let expected = admin_password.0.expose_secret().trim();
    if expected.is_empty() || !signer.is_configured() {
        return Err(ApiError::Configuration(anyhow!(
            "The admin password and the HMAC secret must both be configured"
        )));
    }

    if form.password.expose_secret().trim() != expected {
        tracing::warn!("Admin login rejected: incorrect password");
        return Err(ApiError::InvalidPassword);
    }

    let claims = AdminClaims::admin(Utc::now().timestamp_millis());
    let token = signer.issue(&claims)?;
    tracing::info!(issued_at_millis = claims.issued_at_millis, "Issued admin credential");

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        token,
    }))
}
