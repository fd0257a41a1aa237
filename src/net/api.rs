//! REST helper for the remote sign-in endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning [`ApiError::Unavailable`]
//! since the endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]. Rejections keep the server's
//! `message` so the page can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::SigninResponse;
#[cfg(feature = "hydrate")]
use super::types::SigninRequest;

/// Seam between the sign-in page and the authentication server.
#[allow(async_fn_in_trait)]
pub trait SigninApi {
    /// Submit credentials and return the server's envelope.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, ApiError>;
}

/// [`SigninApi`] backed by `POST {api_base}/auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSigninApi {
    api_base: String,
}

impl HttpSigninApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    pub fn endpoint(&self) -> String {
        signin_endpoint(&self.api_base)
    }
}

impl SigninApi for HttpSigninApi {
    async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, ApiError> {
        signin(&self.endpoint(), email, password).await
    }
}

fn signin_endpoint(api_base: &str) -> String {
    format!("{}/auth/signin", api_base.trim_end_matches('/'))
}

/// Build the error for a non-2xx response, keeping the server's message when
/// the body decodes as `{ "message": ... }`.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    ApiError::Rejected { status, message }
}

/// Post credentials to `url` and decode the sign-in envelope.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request cannot be sent,
/// [`ApiError::Rejected`] for a non-OK status, [`ApiError::Decode`] for an
/// unreadable body, and [`ApiError::Unavailable`] outside the browser.
pub async fn signin(url: &str, email: &str, password: &str) -> Result<SigninResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = SigninRequest { email, password };
        let resp = gloo_net::http::Request::post(url)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(resp.status(), &body));
        }
        resp.json::<SigninResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, email, password);
        Err(ApiError::Unavailable)
    }
}
