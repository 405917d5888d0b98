use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use serde::{de::DeserializeOwned, Serialize};
use sha2::Sha256;

use crate::encoding::{decode_segment, encode_segment, split_segments};
use crate::error::CredentialError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Issues and verifies credentials with a process-wide HMAC secret.
///
/// The secret is injected once at construction. An empty secret is accepted
/// here and reported as [`CredentialError::MissingSecret`] on every call, so
/// a misconfigured deployment fails loudly per request instead of handing
/// out unusable credentials.
#[derive(Clone)]
pub struct CredentialSigner {
    secret: Secret<String>,
}

impl CredentialSigner {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }

    pub fn is_configured(&self) -> bool {
        !self.secret.expose_secret().is_empty()
    }

    fn mac(&self) -> Result<HmacSha256, CredentialError> {
        let secret = self.secret.expose_secret();
        if secret.is_empty() {
            return Err(CredentialError::MissingSecret);
        }
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| CredentialError::InvalidSecret)
    }

    /// Sign `claims` into a compact, URL-safe credential.
    ///
    /// Deterministic: the same claims and secret always give the same bytes.
    pub fn issue<C>(&self, claims: &C) -> Result<String, CredentialError>
    where
        C: Serialize + ?Sized,
    {
        let mut mac = self.mac()?;

        let header = encode_segment(serde_json::to_vec(&HEADER)?);
        let payload = encode_segment(serde_json::to_vec(claims)?);
        let signing_input = format!("{header}.{payload}");

        mac.update(signing_input.as_bytes());
        let signature = encode_segment(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }

    /// Return the claims of `credential` if, and only if, it is well formed
    /// and carries a valid signature.
    ///
    /// Malformed, tampered and foreign credentials all come back as
    /// `Ok(None)`. The only error is a configuration problem with the secret.
    pub fn verify<C>(&self, credential: &str) -> Result<Option<C>, CredentialError>
    where
        C: DeserializeOwned,
    {
        let mut mac = self.mac()?;

        let Some((header, payload, signature)) = split_segments(credential) else {
            tracing::debug!("Rejected credential: expected three non-empty segments");
            return Ok(None);
        };

        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());

        let Some(signature) = decode_segment(signature) else {
            tracing::debug!("Rejected credential: signature is not base64url");
            return Ok(None);
        };
        // Constant time comparison against the recomputed MAC.
        if mac.verify_slice(&signature).is_err() {
            tracing::debug!("Rejected credential: signature mismatch");
            return Ok(None);
        }

        let claims = decode_segment(payload)
            .and_then(|bytes| serde_json::from_slice::<C>(&bytes).ok());
        if claims.is_none() {
            tracing::debug!("Rejected credential: payload is not valid claims");
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for CredentialSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
