use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`. The PIN travels as the joined 4-digit
/// string, never as individual cells.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub pin: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

/// Payload the API attaches to non-2xx responses. `message` is optional;
/// callers fall back to a per-form string when it is absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_wire_shape() {
        let request = LoginRequest {
            username: "alice".to_string(),
            pin: "1234".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"username": "alice", "pin": "1234"})
        );
    }

    #[test]
    fn test_signup_request_wire_shape() {
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            full_name: String::new(),
            phone: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "email": "user@example.com",
                "password": "hunter2",
                "full_name": "",
                "phone": "",
            })
        );
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let with: ApiErrorBody = serde_json::from_value(json!({"message": "Email taken"})).unwrap();
        assert_eq!(with.message.as_deref(), Some("Email taken"));

        let without: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(without.message, None);

        let extra: ApiErrorBody =
            serde_json::from_value(json!({"code": 409, "message": "Email taken"})).unwrap();
        assert_eq!(extra.message.as_deref(), Some("Email taken"));
    }
}
