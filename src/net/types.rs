//! Wire DTOs for the sign-in endpoint.
//!
//! DESIGN
//! ======
//! Response fields default when absent so a terse server reply still decodes
//! and the page can decide what counts as success.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SigninRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Envelope returned by the sign-in endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SigninResponse {
    /// Whether the server accepted the credentials.
    #[serde(default)]
    pub success: bool,
    /// Human-readable status text shown to the user.
    #[serde(default)]
    pub message: String,
    /// Issued credentials; only present on success.
    #[serde(default)]
    pub data: Option<SigninPayload>,
}

/// Token and display name issued for an accepted sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SigninPayload {
    pub token: String,
    pub name: String,
}

/// Error body attached to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
