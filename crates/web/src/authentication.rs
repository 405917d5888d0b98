use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use anyhow::anyhow;
use credential::{AdminClaims, CredentialSigner};

use crate::error::ApiError;

/// Proof that the request carries a valid admin credential.
///
/// Taking `AdminSession` as the first handler argument rejects the request
/// with 401 before the body is read or the store is touched.
#[derive(Debug)]
pub struct AdminSession(AdminClaims);

impl AdminSession {
    pub fn claims(&self) -> &AdminClaims {
        &self.0
    }
}

impl FromRequest for AdminSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AdminSession, ApiError> {
    let signer = req
        .app_data::<Data<CredentialSigner>>()
        .ok_or_else(|| ApiError::Configuration(anyhow!("No credential signer registered")))?;

    let Some(credential) = bearer_credential(req.headers()) else {
        tracing::info!("Rejected admin request without a bearer credential");
        return Err(ApiError::Unauthorized);
    };

    match signer.verify::<AdminClaims>(credential)? {
        Some(claims) if claims.is_admin() => Ok(AdminSession(claims)),
        _ => {
            tracing::info!("Rejected admin request with an invalid credential");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Extract `<credential>` from `Authorization: Bearer <credential>`.
fn bearer_credential(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|credential| !credential.is_empty())
}
