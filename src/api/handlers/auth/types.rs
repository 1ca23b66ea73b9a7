//! Request/response types for auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
}

/// Returned by sign-up: the account id to pair with the emailed passcode.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AccountResponse {
    #[serde(rename = "accountId")]
    pub account_id: String,
}

/// Returned by sign-in. An unknown email is a normal outcome, not an error
/// status: `accountId` is null and `error` explains why, so the frontend can
/// route the user to signup.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignInResponse {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct VerifyRequest {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub secret: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn sign_up_request_uses_camel_case() -> Result<()> {
        let request: SignUpRequest = serde_json::from_str(
            r#"{"fullName": "Alice Example", "email": "alice@example.com"}"#,
        )?;
        assert_eq!(request.full_name, "Alice Example");
        assert_eq!(request.email, "alice@example.com");
        Ok(())
    }

    #[test]
    fn sign_in_response_omits_error_when_absent() -> Result<()> {
        let response = SignInResponse {
            account_id: Some("acct-1".to_string()),
            error: None,
        };
        let value = serde_json::to_value(&response)?;
        assert_eq!(
            value
                .get("accountId")
                .and_then(serde_json::Value::as_str),
            Some("acct-1")
        );
        assert!(value.get("error").is_none());
        Ok(())
    }

    #[test]
    fn sign_in_response_serializes_null_account_with_error() -> Result<()> {
        let response = SignInResponse {
            account_id: None,
            error: Some("User not found".to_string()),
        };
        let value = serde_json::to_value(&response)?;
        assert!(value
            .get("accountId")
            .context("accountId must be present")?
            .is_null());
        assert_eq!(
            value.get("error").and_then(serde_json::Value::as_str),
            Some("User not found")
        );
        Ok(())
    }
}
