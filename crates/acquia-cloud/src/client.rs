//! AcquiaApi implementation

use crate::models::{
    AuthErrorBody, Collection, RawApplication, RawEnvironment, RemoteMessage, SshKey, Token,
};
use crate::{Error, Result};
use acquia_fs::{NormalizedPath, io};
use acquia_meta::{Application, Environment};
use reqwest::{Response, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// OAuth2 token endpoint
pub const AUTH_URL: &str = "https://accounts.acquia.com/api/auth/oauth/token";

/// REST API root
pub const BASE_URL: &str = "https://cloud.acquia.com/api/";

/// Label prefix for uploaded SSH keys
pub const DEFAULT_KEY_LABEL: &str = "Lando";

const POST_KEY_FAILED: &str = "Something went wrong posting your key!";

/// Client for the Acquia Cloud API.
///
/// One instance per command invocation. The token obtained by [`auth`] is
/// kept until the next forced authentication.
///
/// [`auth`]: AcquiaApi::auth
#[derive(Debug, Clone)]
pub struct AcquiaApi {
    http: reqwest::Client,
    auth_url: String,
    base_url: String,
    token: Option<Token>,
    account: Option<Value>,
}

impl Default for AcquiaApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AcquiaApi {
    pub fn new() -> Self {
        Self::with_endpoints(AUTH_URL, BASE_URL)
    }

    /// Create a client talking to other endpoints (staging, local mocks).
    pub fn with_endpoints(auth_url: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: auth_url.into(),
            base_url: base_url.into(),
            token: None,
            account: None,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Exchange client credentials for an access token.
    ///
    /// A cached token is reused unless `force` is set. Unless `token_only`
    /// is set the account is fetched as well and returned.
    pub async fn auth(
        &mut self,
        client_id: &str,
        client_secret: &str,
        force: bool,
        token_only: bool,
    ) -> Result<Option<Value>> {
        if !force && self.token.is_some() {
            return Ok(self.account.clone());
        }

        tracing::info!(url = %self.auth_url, "Authenticating with Acquia");
        self.account = None;

        let form = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "client_credentials"),
            ("scope", ""),
        ];
        let response = self.http.post(&self.auth_url).form(&form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: AuthErrorBody = response.json().await.unwrap_or_default();
            let description = body
                .error_description
                .or(body.error)
                .unwrap_or_else(|| status.to_string());
            return Err(Error::Authentication(description));
        }

        let token: Token = response.json().await?;
        self.token = Some(token);

        if token_only {
            return Ok(None);
        }

        self.account = self.get_account().await?;
        Ok(self.account.clone())
    }

    /// The authenticated account, or `None` when the lookup failed.
    pub async fn get_account(&self) -> Result<Option<Value>> {
        self.get_lenient("account").await
    }

    /// Applications visible to the account.
    pub async fn get_applications(&self) -> Result<Option<Vec<Application>>> {
        let collection: Option<Collection<RawApplication>> =
            self.get_lenient("applications").await?;
        Ok(collection.map(|c| c.into_items().into_iter().map(Application::from).collect()))
    }

    /// Environments of one application.
    pub async fn get_environments(&self, app_id: &str) -> Result<Option<Vec<Environment>>> {
        let path = format!("applications/{app_id}/environments");
        let collection: Option<Collection<RawEnvironment>> = self.get_lenient(&path).await?;
        Ok(collection.map(|c| c.into_items().into_iter().map(Environment::from).collect()))
    }

    /// Upload a public key unless an identical one already exists.
    ///
    /// Existing keys whose label starts with `label` are counted and the new
    /// key is posted as `<label><count + 1>`. Returns the remote response when
    /// a key was posted.
    pub async fn post_key(&self, path: &NormalizedPath, label: &str) -> Result<Option<Value>> {
        let public_key = io::read_text(path)?.trim().to_string();

        let response = self
            .authorized(self.http.get(self.url("account/ssh-keys")))?
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Remote(remote_message(response, POST_KEY_FAILED).await));
        }
        let existing: Collection<SshKey> = response.json().await?;

        let ours: Vec<SshKey> = existing
            .embedded
            .map(|e| e.items)
            .unwrap_or_default()
            .into_iter()
            .filter(|key| key.label.starts_with(label))
            .collect();

        if ours.iter().any(|key| key.public_key == public_key) {
            tracing::debug!(label, "Key already uploaded");
            return Ok(None);
        }

        let new_key = SshKey {
            label: format!("{label}{}", ours.len() + 1),
            public_key,
        };
        tracing::info!(label = %new_key.label, "Posting SSH key");

        let response = self
            .authorized(self.http.post(self.url("account/ssh-keys")))?
            .json(&new_key)
            .send()
            .await
            .map_err(|_| Error::Remote(POST_KEY_FAILED.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Remote(remote_message(response, POST_KEY_FAILED).await));
        }

        Ok(Some(response.json().await.unwrap_or(Value::Null)))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        let token = self.token.as_ref().ok_or(Error::NotAuthenticated)?;
        Ok(request.header(
            header::AUTHORIZATION,
            format!("Bearer {}", token.access_token),
        ))
    }

    /// GET that logs failures and resolves them to `None`.
    async fn get_lenient<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url(path);
        let request = self.authorized(self.http.get(&url))?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Request failed");
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let message = remote_message(response, "no message").await;
            tracing::warn!(url = %url, %status, detail = %message, "Remote call failed");
            return Ok(None);
        }

        match response.json().await {
            Ok(body) => Ok(Some(body)),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Unexpected response body");
                Ok(None)
            }
        }
    }
}

async fn remote_message(response: Response, fallback: &str) -> String {
    let body: RemoteMessage = response.json().await.unwrap_or_default();
    body.message.unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = AcquiaApi::with_endpoints("http://auth", "http://api/");
        assert_eq!(api.url("/applications"), "http://api/applications");

        let api = AcquiaApi::with_endpoints("http://auth", "http://api");
        assert_eq!(api.url("account"), "http://api/account");
    }

    #[test]
    fn test_unauthenticated_requests_rejected() {
        let api = AcquiaApi::new();
        let result = api.authorized(api.http.get("http://localhost"));
        assert!(matches!(result, Err(Error::NotAuthenticated)));
    }
}
