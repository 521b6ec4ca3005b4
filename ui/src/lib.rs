//! Shared UI for the auth portal: the login and signup screens, the pure
//! form-state logic behind them, and the client for the authentication API.

pub mod app;
pub use app::{LoginPage, SignupPage};

pub mod components;
pub mod features;
pub mod services;
