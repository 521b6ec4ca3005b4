use tracing::{info, warn};

use super::{rejection_message, SubmitOutcome};
use crate::services::client::types::SignupRequest;
use crate::services::client::{AuthClient, ClientResult};

pub const SIGNUP_REJECTED_FALLBACK: &str = "Something went wrong";

const SIGNUP_PATH: &str = "/api/auth/signup";

/// One registration attempt. The success body is not consumed beyond
/// confirming the account was created.
pub async fn submit_signup(
    client: &AuthClient,
    request: &SignupRequest,
) -> ClientResult<SubmitOutcome> {
    info!("submitting signup");

    let reply = client.post_json(SIGNUP_PATH, request).await?;

    if reply.ok {
        info!("signup accepted");
        Ok(SubmitOutcome::Accepted { body: reply.body })
    } else {
        let message = rejection_message(&reply.body, SIGNUP_REJECTED_FALLBACK);
        warn!("signup rejected: {message}");
        Ok(SubmitOutcome::Rejected { message })
    }
}
