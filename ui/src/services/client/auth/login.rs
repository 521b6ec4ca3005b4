use tracing::{info, warn};

use super::{rejection_message, SubmitOutcome};
use crate::services::client::types::LoginRequest;
use crate::services::client::{AuthClient, ClientResult};

pub const LOGIN_REJECTED_FALLBACK: &str = "Invalid credentials.";

const LOGIN_PATH: &str = "/api/login";

/// One login attempt. A non-2xx reply becomes `Rejected` with the
/// server's message; failing to reach the server, or to parse its reply,
/// surfaces as a `ClientError` instead.
pub async fn submit_login(
    client: &AuthClient,
    request: &LoginRequest,
) -> ClientResult<SubmitOutcome> {
    info!("submitting login for username: {}", request.username);

    let reply = client.post_json(LOGIN_PATH, request).await?;

    if reply.ok {
        info!("login accepted for username: {}", request.username);
        Ok(SubmitOutcome::Accepted { body: reply.body })
    } else {
        let message = rejection_message(&reply.body, LOGIN_REJECTED_FALLBACK);
        warn!("login rejected: {message}");
        Ok(SubmitOutcome::Rejected { message })
    }
}
