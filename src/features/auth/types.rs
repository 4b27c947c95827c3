//! Request and response types for the phone sign-in API. These payloads carry
//! one-time codes and access tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendCodeRequest {
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub phone: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Signed-in session kept in memory and mirrored to `localStorage`.
/// Holds only the bearer token and the phone it was issued for.
pub struct AuthSession {
    pub access_token: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_code_response_deserialization() {
        let json = r#"{"access_token":"tok_9f2c","expires_in":3600}"#;

        let response: VerifyCodeResponse =
            serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.access_token, "tok_9f2c");
        assert_eq!(response.expires_in, 3600);
    }

    #[test]
    fn test_verify_code_request_serialization() {
        let request = VerifyCodeRequest {
            phone: "+252612345678".to_string(),
            code: "4821".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("+252612345678"));
        assert!(json.contains("4821"));
    }
}
