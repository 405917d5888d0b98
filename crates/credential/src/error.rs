/// Failures the credential module reports as errors rather than as an
/// invalid credential.
///
/// An invalid, tampered or foreign credential is never an error: `verify`
/// reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("The credential signing secret is not configured")]
    MissingSecret,
    #[error("The credential signing secret cannot be used as an HMAC key")]
    InvalidSecret,
    #[error("Failed to serialize credential claims")]
    Serialization(#[from] serde_json::Error),
}

impl CredentialError {
    /// True when the failure is an operator misconfiguration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingSecret | Self::InvalidSecret)
    }
}
