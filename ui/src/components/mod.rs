//! Reusable Dioxus components for the auth portal:
//!
//! - **forms**: the login and signup forms
//! - **inputs**: text fields and the single-digit PIN cells

pub mod forms;
pub mod inputs;
