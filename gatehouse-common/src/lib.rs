//! Common types shared between the gatehouse front-end and the authorization server

pub mod validate;

use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint.
///
/// Constructed once per submission attempt after both fields pass local
/// validation; the wire body of `POST auth/login-code/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response: the URI the browser must navigate to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedirectResponse {
    pub redirect_uri: String,
}

/// Error body emitted by the authorization server on a non-success status.
///
/// The server raises its failures with a `detail` string; anything else in the
/// body is not part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_to_wire_shape() {
        let creds = Credentials {
            username: "alice_01".to_string(),
            password: "Sup3rSecret!".to_string(),
        };

        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "alice_01", "password": "Sup3rSecret!"})
        );
    }

    #[test]
    fn redirect_response_parses() {
        let body = r#"{"redirect_uri":"https://app.example/cb?code=xyz"}"#;
        let parsed: RedirectResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.redirect_uri, "https://app.example/cb?code=xyz");
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let parsed: ErrorBody = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(parsed.detail.is_none());

        let parsed: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(parsed.detail.as_deref(), Some("Invalid credentials"));
    }
}
