/**
 * Shared Types Module
 *
 * Defines the view state, the user record, and the wire types exchanged
 * with the login and sign-up endpoints.
 */

use serde::{Deserialize, Serialize};

/// Which screen the app is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Login and sign-up forms, side by side
    Forms,
    /// Profile screen for the signed-in user
    Authenticated(User),
}

/// User record returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Sign-up request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Outcome of a login or sign-up call.
///
/// The server reports failures in-band: `success` is false and `message`
/// carries the reason. A missing `success` field is a malformed response
/// and is rejected at the decoding boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_starts_distinguishable() {
        let user = User {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
        };
        assert_ne!(ViewState::Forms, ViewState::Authenticated(user));
    }

    #[test]
    fn test_session_result_full_body() {
        let json = r#"{"success":true,"user":{"username":"a","email":"a@x.com"}}"#;
        let result: SessionResult = serde_json::from_str(json).unwrap();
        assert!(result.success);
        assert_eq!(result.user.unwrap().username, "a");
        assert!(result.message.is_none());
    }

    #[test]
    fn test_session_result_failure_body() {
        let json = r#"{"success":false,"message":"bad credentials"}"#;
        let result: SessionResult = serde_json::from_str(json).unwrap();
        assert!(!result.success);
        assert!(result.user.is_none());
        assert_eq!(result.message, Some("bad credentials".to_string()));
    }

    #[test]
    fn test_session_result_requires_success_field() {
        let json = r#"{"message":"no verdict"}"#;
        let result: Result<SessionResult, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_result_tolerates_unknown_fields() {
        let json = r#"{"success":true,"user":{"username":"a","email":"a@x.com"},"token":"xyz"}"#;
        let result: SessionResult = serde_json::from_str(json).unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let user = User {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }

    #[test]
    fn test_login_request_body_shape() {
        let request = LoginRequest {
            username: "a".to_string(),
            password: "b".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"username": "a", "password": "b"}));
    }
}
