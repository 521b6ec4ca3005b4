//! Form-state logic for the auth screens, kept free of rsx so it can be
//! unit tested.

pub mod form_validation;
pub mod pin;
pub mod types;

pub use form_validation::{login_validation_message, ERR_PIN_INCOMPLETE, ERR_USERNAME_REQUIRED};
pub use pin::{is_digit_keystroke, DigitEntry, PinDigits, PIN_LEN};
pub use types::{RegistrationForm, SignupField, SubmissionStatus};
