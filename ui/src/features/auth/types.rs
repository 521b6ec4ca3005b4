//! Form state owned by a single mounted form instance.

/// Lifecycle of one submission attempt. Entering `Loading` replaces any
/// prior terminal message, so stale errors never outlive a resubmission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(message) => Some(message),
            _ => None,
        }
    }
}

/// Fields of the registration record, for name-based merges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Email,
    Password,
    FullName,
    Phone,
}

/// Flat record collected by the signup form. Only email and password are
/// marked required in the markup; nothing is validated locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

impl RegistrationForm {
    /// Merges one changed field, leaving the others untouched.
    pub fn update(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::FullName => self.full_name = value,
            SignupField::Phone => self.phone = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_merges_single_field() {
        let mut form = RegistrationForm::default();
        form.update(SignupField::Email, "user@example.com".to_string());
        form.update(SignupField::Phone, "+15551234567".to_string());

        assert_eq!(form.email, "user@example.com");
        assert_eq!(form.phone, "+15551234567");
        assert_eq!(form.password, "");
        assert_eq!(form.full_name, "");

        form.update(SignupField::Email, "other@example.com".to_string());
        assert_eq!(form.email, "other@example.com");
        assert_eq!(form.phone, "+15551234567");
    }

    #[test]
    fn test_loading_replaces_terminal_message() {
        let mut status = SubmissionStatus::Error("Invalid credentials.".to_string());
        assert_eq!(status.error(), Some("Invalid credentials."));

        status = SubmissionStatus::Loading;
        assert!(status.is_loading());
        assert_eq!(status.error(), None);
        assert_eq!(status.success(), None);
    }

    #[test]
    fn test_status_accessors() {
        assert!(!SubmissionStatus::Idle.is_loading());
        assert_eq!(
            SubmissionStatus::Success("Account created! You can now log in.".to_string()).success(),
            Some("Account created! You can now log in.")
        );
        assert_eq!(SubmissionStatus::Idle.success(), None);
    }
}
