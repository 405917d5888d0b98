use serde::{Deserialize, Serialize};

/// The only principal this system recognizes.
pub const ADMIN_PRINCIPAL: &str = "admin";

/// Claims carried by the credential handed out at login.
///
/// There is no expiry claim: a credential stays valid until the signing
/// secret changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminClaims {
    pub principal: String,
    pub issued_at_millis: i64,
}

impl AdminClaims {
    pub fn admin(issued_at_millis: i64) -> Self {
        Self {
            principal: ADMIN_PRINCIPAL.to_string(),
            issued_at_millis,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.principal == ADMIN_PRINCIPAL
    }
}
