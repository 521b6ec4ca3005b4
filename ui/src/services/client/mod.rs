// Client-side access to the authentication API.
//
// The whole wire surface is two JSON POSTs (`/api/login`,
// `/api/auth/signup`). Paths are resolved against the page origin because
// the bundle is served from the same host as the API.

pub mod auth;
pub mod errors;
pub mod types;

pub use auth::{submit_login, submit_signup, SubmitOutcome};
pub use errors::{ClientError, ClientResult};
pub use types::{ApiErrorBody, LoginRequest, SignupRequest};

use reqwest::Client;
use serde::Serialize;

/// One JSON reply, success and failure alike. Outcome interpretation is
/// left to the per-form submission functions.
pub(crate) struct ApiReply {
    pub ok: bool,
    pub body: serde_json::Value,
}

/// Fetch-backed client for the auth endpoints.
#[derive(Clone)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new() -> Self {
        Self::with_base_url(page_origin())
    }

    /// Builds against an explicit origin instead of the page location.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiReply> {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("request to {path} failed: {e}"),
            })?;

        let ok = response.status().is_success();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ClientError::MalformedBody {
                message: format!("response from {path} was not JSON: {e}"),
            })?;

        Ok(ApiReply { ok, body })
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin the current document was served from. Empty outside a browser,
/// which leaves the API paths site-relative.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
