use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::components::inputs::{InputType, PinCellInput, TextInput};
use crate::features::auth::{
    is_digit_keystroke, login_validation_message, DigitEntry, PinDigits, SubmissionStatus, PIN_LEN,
};
use crate::services::client::{submit_login, AuthClient, ClientResult, LoginRequest, SubmitOutcome};

pub const LOGIN_NETWORK_ERROR: &str = "Network error. Check your connection.";

/// Focus handles for the four rendered PIN cells, captured on mount.
type PinCellRefs = [Option<Rc<MountedData>>; PIN_LEN];

#[component]
pub fn LoginForm() -> Element {
    let mut username = use_signal(String::new);
    let mut pin = use_signal(PinDigits::default);
    let mut status = use_signal(SubmissionStatus::default);
    let mut cell_refs: Signal<PinCellRefs> = use_signal(Default::default);

    let is_loading = status.read().is_loading();
    let error = status.read().error().map(str::to_string);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        status.set(SubmissionStatus::Idle);

        if let Some(message) = login_validation_message(&username.read(), &pin.read()) {
            status.set(SubmissionStatus::Error(message.to_string()));
            return;
        }

        let request = LoginRequest {
            username: username(),
            pin: pin.read().joined(),
        };
        status.set(SubmissionStatus::Loading);

        spawn(async move {
            let result = submit_login(&AuthClient::new(), &request).await;
            status.set(next_status(result));
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: submit,

            label {
                class: "input-label",
                "Username"
            }
            TextInput {
                value: username(),
                placeholder: "Enter your username".to_string(),
                input_type: InputType::Text,
                input_class: "input-field".to_string(),
                required: true,
                disabled: false,
                on_change: move |value: String| username.set(value),
            }

            p {
                class: "pin-caption",
                "Security PIN:"
            }
            div {
                class: "pin-row",
                for index in 0..PIN_LEN {
                    PinCellInput {
                        key: "{index}",
                        value: pin.read().cell(index),
                        disabled: false,
                        on_input: move |event: FormEvent| {
                            let entry = pin.write().enter(index, &event.value());
                            if let DigitEntry::Stored { advance_to: Some(next) } = entry {
                                focus_cell(&cell_refs.read(), next);
                            }
                        },
                        on_keydown: move |event: KeyboardEvent| {
                            match event.key() {
                                Key::Backspace => {
                                    if let Some(previous) = pin.read().backspace_target(index) {
                                        event.prevent_default();
                                        focus_cell(&cell_refs.read(), previous);
                                    }
                                }
                                Key::Character(text) => {
                                    let modifiers = event.modifiers();
                                    let is_shortcut = modifiers.contains(Modifiers::CONTROL)
                                        || modifiers.contains(Modifiers::META);
                                    if !is_shortcut && !is_digit_keystroke(&text) {
                                        event.prevent_default();
                                    }
                                }
                                _ => {}
                            }
                        },
                        on_mounted: move |event: MountedEvent| {
                            cell_refs.write()[index] = Some(event.data());
                        },
                    }
                }
            }

            div {
                class: "form-options",
                label {
                    class: "remember-device",
                    input { r#type: "checkbox" }
                    " Remember this device"
                }
                a {
                    class: "assistance-link",
                    href: "#",
                    "Need assistance?"
                }
            }

            if let Some(message) = error {
                div {
                    class: "form-alert error",
                    "{message}"
                }
            }

            button {
                class: "submit-button",
                r#type: "submit",
                disabled: is_loading,
                if is_loading { "Signing in..." } else { "Login" }
            }

            p {
                class: "form-footer",
                "Don't have an account? "
                a { href: "/signup", "Sign Up" }
            }
        }
    }
}

fn focus_cell(refs: &PinCellRefs, index: usize) {
    if let Some(cell) = refs[index].clone() {
        spawn(async move {
            let _ = cell.set_focus(true).await;
        });
    }
}

/// Status the form settles into once the submission attempt resolves.
/// Every arm leaves loading behind.
fn next_status(result: ClientResult<SubmitOutcome>) -> SubmissionStatus {
    match result {
        Ok(SubmitOutcome::Accepted { body }) => {
            // Success path is intentionally inert: the reply is recorded
            // for diagnostics, nothing is navigated or stored.
            debug!("logged in: {body}");
            SubmissionStatus::Idle
        }
        Ok(SubmitOutcome::Rejected { message }) => SubmissionStatus::Error(message),
        Err(_) => SubmissionStatus::Error(LOGIN_NETWORK_ERROR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::ClientError;
    use serde_json::json;

    #[test]
    fn test_accepted_login_returns_to_idle() {
        let status = next_status(Ok(SubmitOutcome::Accepted {
            body: json!({"token": "x"}),
        }));
        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(status.error(), None);
        assert!(!status.is_loading());
    }

    #[test]
    fn test_rejected_login_shows_server_message() {
        let status = next_status(Ok(SubmitOutcome::Rejected {
            message: "Invalid credentials.".to_string(),
        }));
        assert_eq!(status.error(), Some("Invalid credentials."));
    }

    #[test]
    fn test_transport_failure_shows_connection_error() {
        let status = next_status(Err(ClientError::Network {
            message: "request to /api/login failed".to_string(),
        }));
        assert_eq!(status.error(), Some("Network error. Check your connection."));
        assert!(!status.is_loading());
    }

    #[test]
    fn test_unparsable_reply_counts_as_transport_failure() {
        let status = next_status(Err(ClientError::MalformedBody {
            message: "response from /api/login was not JSON".to_string(),
        }));
        assert_eq!(status.error(), Some("Network error. Check your connection."));
    }
}
