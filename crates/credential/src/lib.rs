//! Stateless signed credentials for the dealership back-office.
//!
//! A credential is three base64url segments joined by `.`: a fixed
//! `{"alg":"HS256","typ":"JWT"}` header, a JSON claims payload and an
//! HMAC-SHA256 signature over the first two segments. Nothing is stored on
//! the server; whoever holds a validly signed credential is the admin.
mod admin;
mod encoding;
mod error;
mod signer;

pub use admin::{AdminClaims, ADMIN_PRINCIPAL};
pub use error::CredentialError;
pub use signer::CredentialSigner;
