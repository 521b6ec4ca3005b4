use super::pin::{PinDigits, PIN_LEN};

pub const ERR_USERNAME_REQUIRED: &str = "Username is required.";
pub const ERR_PIN_INCOMPLETE: &str = "Enter full 4-digit PIN.";

/// Local checks that gate the login request. The first failure wins and no
/// request is issued for that attempt.
pub fn login_validation_message(username: &str, pin: &PinDigits) -> Option<&'static str> {
    if username.is_empty() {
        return Some(ERR_USERNAME_REQUIRED);
    }
    if pin.joined().len() != PIN_LEN {
        return Some(ERR_PIN_INCOMPLETE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin_from(digits: [&str; PIN_LEN]) -> PinDigits {
        let mut pin = PinDigits::default();
        for (index, digit) in digits.iter().enumerate() {
            pin.enter(index, digit);
        }
        pin
    }

    #[test]
    fn test_empty_username_reported_first() {
        let pin = pin_from(["1", "2", "3", "4"]);
        assert_eq!(
            login_validation_message("", &pin),
            Some(ERR_USERNAME_REQUIRED)
        );

        // Username check wins even when the PIN is also incomplete.
        assert_eq!(
            login_validation_message("", &PinDigits::default()),
            Some(ERR_USERNAME_REQUIRED)
        );
    }

    #[test]
    fn test_partial_pin_blocks_submission() {
        let pin = pin_from(["1", "2", "", ""]);
        assert_eq!(
            login_validation_message("alice", &pin),
            Some(ERR_PIN_INCOMPLETE)
        );
    }

    #[test]
    fn test_complete_credentials_pass() {
        let pin = pin_from(["1", "2", "3", "4"]);
        assert_eq!(login_validation_message("alice", &pin), None);
    }
}
