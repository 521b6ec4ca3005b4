pub mod login_form;
pub mod signup_form;

pub use login_form::{LoginForm, LOGIN_NETWORK_ERROR};
pub use signup_form::{SignupForm, SIGNUP_NETWORK_ERROR, SIGNUP_SUCCESS};
