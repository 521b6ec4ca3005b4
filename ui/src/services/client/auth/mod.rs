//! Submission calls for the two auth forms.

mod login;
mod signup;

pub use login::{submit_login, LOGIN_REJECTED_FALLBACK};
pub use signup::{submit_signup, SIGNUP_REJECTED_FALLBACK};

use super::types::ApiErrorBody;

/// Result of one submission attempt that produced a well-formed response:
/// accepted by the server, or rejected with a displayable message.
/// Transport failures surface separately as [`super::ClientError`].
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Accepted { body: serde_json::Value },
    Rejected { message: String },
}

/// Server-provided rejection text when the body carries one, the per-form
/// fallback otherwise. An empty message counts as absent.
fn rejection_message(body: &serde_json::Value, fallback: &str) -> String {
    serde_json::from_value::<ApiErrorBody>(body.clone())
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
