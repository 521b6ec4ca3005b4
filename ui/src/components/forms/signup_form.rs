use dioxus::prelude::*;

use crate::components::inputs::{InputType, TextInput};
use crate::features::auth::{RegistrationForm, SignupField, SubmissionStatus};
use crate::services::client::{
    submit_signup, AuthClient, ClientResult, SignupRequest, SubmitOutcome,
};

pub const SIGNUP_NETWORK_ERROR: &str = "Network error. Try again.";
pub const SIGNUP_SUCCESS: &str = "Account created! You can now log in.";

#[component]
pub fn SignupForm() -> Element {
    let mut form = use_signal(RegistrationForm::default);
    let mut status = use_signal(SubmissionStatus::default);

    let is_loading = status.read().is_loading();
    let error = status.read().error().map(str::to_string);
    let success = status.read().success().map(str::to_string);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let request = {
            let record = form.read();
            SignupRequest {
                email: record.email.clone(),
                password: record.password.clone(),
                full_name: record.full_name.clone(),
                phone: record.phone.clone(),
            }
        };
        // Clears any previous error or success message.
        status.set(SubmissionStatus::Loading);

        spawn(async move {
            let result = submit_signup(&AuthClient::new(), &request).await;
            status.set(next_status(result));
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: submit,

            label {
                class: "input-label",
                "Email"
            }
            TextInput {
                value: form.read().email.clone(),
                placeholder: "you@example.com".to_string(),
                input_type: InputType::Email,
                input_class: "input-field".to_string(),
                required: true,
                disabled: false,
                on_change: move |value: String| form.write().update(SignupField::Email, value),
            }

            label {
                class: "input-label",
                "Password"
            }
            TextInput {
                value: form.read().password.clone(),
                placeholder: "Choose a password".to_string(),
                input_type: InputType::Password,
                input_class: "input-field".to_string(),
                required: true,
                disabled: false,
                on_change: move |value: String| form.write().update(SignupField::Password, value),
            }

            label {
                class: "input-label",
                "Full Name"
            }
            TextInput {
                value: form.read().full_name.clone(),
                placeholder: "Your full name (optional)".to_string(),
                input_type: InputType::Text,
                input_class: "input-field".to_string(),
                required: false,
                disabled: false,
                on_change: move |value: String| form.write().update(SignupField::FullName, value),
            }

            label {
                class: "input-label",
                "Phone Number"
            }
            TextInput {
                value: form.read().phone.clone(),
                placeholder: "Your phone number (optional)".to_string(),
                input_type: InputType::Tel,
                input_class: "input-field".to_string(),
                required: false,
                disabled: false,
                on_change: move |value: String| form.write().update(SignupField::Phone, value),
            }

            if let Some(message) = error {
                div {
                    class: "form-alert error",
                    "{message}"
                }
            }

            if let Some(message) = success {
                div {
                    class: "form-alert success",
                    "{message}"
                }
            }

            button {
                class: "submit-button",
                r#type: "submit",
                disabled: is_loading,
                if is_loading { "Signing up..." } else { "Sign Up" }
            }

            p {
                class: "form-footer",
                "Already have an account? "
                a { href: "/", "Log In" }
            }
        }
    }
}

/// Status the form settles into once the submission attempt resolves.
/// Every arm leaves loading behind.
fn next_status(result: ClientResult<SubmitOutcome>) -> SubmissionStatus {
    match result {
        Ok(SubmitOutcome::Accepted { .. }) => SubmissionStatus::Success(SIGNUP_SUCCESS.to_string()),
        Ok(SubmitOutcome::Rejected { message }) => SubmissionStatus::Error(message),
        Err(_) => SubmissionStatus::Error(SIGNUP_NETWORK_ERROR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::ClientError;
    use serde_json::json;

    #[test]
    fn test_created_account_shows_success_and_clears_error() {
        let status = next_status(Ok(SubmitOutcome::Accepted { body: json!({}) }));
        assert_eq!(status.success(), Some("Account created! You can now log in."));
        assert_eq!(status.error(), None);
        assert!(!status.is_loading());
    }

    #[test]
    fn test_rejected_signup_shows_server_message_without_success() {
        let status = next_status(Ok(SubmitOutcome::Rejected {
            message: "Email taken".to_string(),
        }));
        assert_eq!(status.error(), Some("Email taken"));
        assert_eq!(status.success(), None);
    }

    #[test]
    fn test_transport_failure_shows_retry_error() {
        let status = next_status(Err(ClientError::Network {
            message: "request to /api/auth/signup failed".to_string(),
        }));
        assert_eq!(status.error(), Some("Network error. Try again."));
        assert!(!status.is_loading());
    }
}
