//! Wire types for the identity platform REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of requesting a one-time passcode email.
///
/// The passcode itself never reaches this service; only the account id comes
/// back, to be paired with the user-supplied passcode later.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailToken {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Session issued by the platform after passcode verification.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    pub secret: String,
}

/// Account behind an active session.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
}

/// User profile document stored in the platform's document database.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    /// Platform-assigned document id.
    #[serde(rename = "$id")]
    pub document_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub avatar: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
}

/// Fields for a profile document created on first signup.
#[derive(Debug, Clone, Serialize)]
pub struct NewProfile {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub avatar: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
}

/// Paged document listing returned by the document API.
#[derive(Debug, Deserialize)]
pub struct DocumentList {
    pub total: u64,
    pub documents: Vec<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn profile_uses_platform_field_names() -> Result<()> {
        let profile: Profile = serde_json::from_value(json!({
            "$id": "doc-1",
            "fullName": "Alice Example",
            "email": "alice@example.com",
            "avatar": "https://cdn.example.com/avatar.png",
            "accountId": "acct-1"
        }))?;
        assert_eq!(profile.document_id, "doc-1");
        assert_eq!(profile.full_name, "Alice Example");
        assert_eq!(profile.account_id, "acct-1");

        let value = serde_json::to_value(&profile)?;
        assert_eq!(value.get("$id"), Some(&json!("doc-1")));
        assert_eq!(value.get("fullName"), Some(&json!("Alice Example")));
        Ok(())
    }

    #[test]
    fn document_list_decodes_total_and_documents() -> Result<()> {
        let list: DocumentList = serde_json::from_value(json!({
            "total": 1,
            "documents": [{
                "$id": "doc-1",
                "fullName": "Alice Example",
                "email": "alice@example.com",
                "avatar": "https://cdn.example.com/avatar.png",
                "accountId": "acct-1"
            }]
        }))?;
        assert_eq!(list.total, 1);
        assert_eq!(list.documents.len(), 1);
        Ok(())
    }

    #[test]
    fn session_decodes_platform_id() -> Result<()> {
        let session: Session = serde_json::from_value(json!({
            "$id": "sess-1",
            "secret": "s3cret"
        }))?;
        assert_eq!(session.id, "sess-1");
        assert_eq!(session.secret, "s3cret");
        Ok(())
    }
}
