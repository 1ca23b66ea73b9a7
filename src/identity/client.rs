//! reqwest implementation of [`IdentityApi`] against the platform REST API.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::{info_span, instrument, Instrument};

use super::{
    endpoint_url,
    types::{Account, DocumentList, EmailToken, NewProfile, Profile, Session},
    IdentityApi,
};
use crate::cli::globals::GlobalArgs;
use crate::APP_USER_AGENT;

const PROJECT_HEADER: &str = "x-appwrite-project";
const API_KEY_HEADER: &str = "x-appwrite-key";
const SESSION_HEADER: &str = "x-appwrite-session";

/// Placeholder id that tells the platform to mint a unique account id.
const UNIQUE_ID: &str = "unique()";

pub struct IdentityClient {
    http: Client,
    endpoint: String,
    project: String,
    api_key: SecretString,
    database_id: String,
    users_collection_id: String,
}

impl IdentityClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the endpoint is invalid.
    pub fn new(
        globals: &GlobalArgs,
        database_id: String,
        users_collection_id: String,
    ) -> Result<Self> {
        // Fail fast on a malformed endpoint instead of on the first request.
        endpoint_url(&globals.identity_endpoint, "/v1/health")?;

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .context("failed to build identity HTTP client")?;

        Ok(Self {
            http,
            endpoint: globals.identity_endpoint.clone(),
            project: globals.identity_project.clone(),
            api_key: globals.identity_api_key.clone(),
            database_id,
            users_collection_id,
        })
    }

    fn documents_url(&self) -> Result<String> {
        endpoint_url(
            &self.endpoint,
            &format!(
                "/v1/databases/{}/collections/{}/documents",
                self.database_id, self.users_collection_id
            ),
        )
    }

    fn admin_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(PROJECT_HEADER, &self.project)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
    }

    fn session_request(
        &self,
        request: reqwest::RequestBuilder,
        session_secret: &str,
    ) -> reqwest::RequestBuilder {
        request
            .header(PROJECT_HEADER, &self.project)
            .header(SESSION_HEADER, session_secret)
    }

    async fn ensure_success(response: Response, what: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(anyhow!("identity {what} failed: {status} {body}"))
    }

    async fn find_one(&self, query: String, what: &str) -> Result<Option<Profile>> {
        let url = self.documents_url()?;
        let span = info_span!(
            "identity.request",
            http.method = "GET",
            url = %url
        );
        let response = self
            .admin_request(self.http.get(&url))
            .query(&[("queries[]", query.as_str())])
            .send()
            .instrument(span)
            .await?;
        let response = Self::ensure_success(response, what).await?;

        let list: DocumentList = response
            .json()
            .await
            .with_context(|| format!("identity {what} returned an invalid document list"))?;
        Ok(list.documents.into_iter().next())
    }
}

/// Build an `equal` filter for the document listing endpoint.
fn equal_query(attribute: &str, value: &str) -> String {
    json!({
        "method": "equal",
        "attribute": attribute,
        "values": [value],
    })
    .to_string()
}

#[async_trait]
impl IdentityApi for IdentityClient {
    #[instrument(skip(self))]
    async fn create_email_token(&self, email: &str) -> Result<EmailToken> {
        let url = endpoint_url(&self.endpoint, "/v1/account/tokens/email")?;
        let span = info_span!(
            "identity.request",
            http.method = "POST",
            url = %url
        );
        let response = self
            .admin_request(self.http.post(&url))
            .json(&json!({ "userId": UNIQUE_ID, "email": email }))
            .send()
            .instrument(span)
            .await?;
        let response = Self::ensure_success(response, "passcode request").await?;

        response
            .json()
            .await
            .context("passcode response is missing the account id")
    }

    #[instrument(skip(self, secret))]
    async fn create_session(&self, account_id: &str, secret: &str) -> Result<Session> {
        let url = endpoint_url(&self.endpoint, "/v1/account/sessions/token")?;
        let span = info_span!(
            "identity.request",
            http.method = "POST",
            url = %url
        );
        let response = self
            .admin_request(self.http.post(&url))
            .json(&json!({ "userId": account_id, "secret": secret }))
            .send()
            .instrument(span)
            .await?;
        let response = Self::ensure_success(response, "session creation").await?;

        response
            .json()
            .await
            .context("session response is missing id or secret")
    }

    #[instrument(skip(self, session_secret))]
    async fn delete_current_session(&self, session_secret: &str) -> Result<()> {
        let url = endpoint_url(&self.endpoint, "/v1/account/sessions/current")?;
        let span = info_span!(
            "identity.request",
            http.method = "DELETE",
            url = %url
        );
        let response = self
            .session_request(self.http.delete(&url), session_secret)
            .send()
            .instrument(span)
            .await?;
        Self::ensure_success(response, "session deletion").await?;
        Ok(())
    }

    #[instrument(skip(self, session_secret))]
    async fn current_account(&self, session_secret: &str) -> Result<Account> {
        let url = endpoint_url(&self.endpoint, "/v1/account")?;
        let span = info_span!(
            "identity.request",
            http.method = "GET",
            url = %url
        );
        let response = self
            .session_request(self.http.get(&url), session_secret)
            .send()
            .instrument(span)
            .await?;
        let response = Self::ensure_success(response, "session lookup").await?;

        response
            .json()
            .await
            .context("account response is missing the account id")
    }

    #[instrument(skip(self))]
    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>> {
        self.find_one(equal_query("email", email), "profile lookup by email")
            .await
    }

    #[instrument(skip(self))]
    async fn find_profile_by_account(&self, account_id: &str) -> Result<Option<Profile>> {
        self.find_one(
            equal_query("accountId", account_id),
            "profile lookup by account",
        )
        .await
    }

    #[instrument(skip(self, profile))]
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile> {
        let url = self.documents_url()?;
        let span = info_span!(
            "identity.request",
            http.method = "POST",
            url = %url
        );
        // Keying the document on the account id makes creation idempotent:
        // a concurrent signup for the same email lands on the same document.
        let account_id = profile.account_id.clone();
        let response = self
            .admin_request(self.http.post(&url))
            .json(&json!({ "documentId": account_id.as_str(), "data": profile }))
            .send()
            .instrument(span)
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return self
                .find_profile_by_account(&account_id)
                .await?
                .context("profile conflict but existing document not found");
        }
        let response = Self::ensure_success(response, "profile creation").await?;

        response
            .json()
            .await
            .context("profile creation returned an invalid document")
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<()> {
        let url = endpoint_url(&self.endpoint, "/v1/health")?;
        let span = info_span!(
            "identity.request",
            http.method = "GET",
            url = %url
        );
        let response = self
            .admin_request(self.http.get(&url))
            .send()
            .instrument(span)
            .await?;
        Self::ensure_success(response, "health check").await?;
        Ok(())
    }
}
