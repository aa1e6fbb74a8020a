//! Wire shapes of the Acquia Cloud API

use acquia_meta::{Application, Environment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OAuth2 access token from the client-credentials exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RemoteMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// HAL collection: `{total, _embedded: {items: [...]}}`
#[derive(Debug, Deserialize)]
pub(crate) struct Collection<T> {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Embedded<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn into_items(self) -> Vec<T> {
        if self.total == Some(0) {
            return Vec::new();
        }
        self.embedded.map(|e| e.items).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawApplication {
    /// Numeric on some API versions, string on others
    pub id: Value,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub subscription: Option<Uuid>,
    #[serde(default)]
    pub hosting: Option<Hosting>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Uuid {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hosting {
    /// `<realm>:<sitename>`
    pub id: String,
}

impl From<RawApplication> for Application {
    fn from(raw: RawApplication) -> Self {
        let name = match &raw.hosting {
            Some(hosting) => {
                let site = hosting.id.split(':').nth(1).unwrap_or(&hosting.id);
                format!("{} ({site})", raw.name)
            }
            None => raw.name,
        };
        let id = match raw.id {
            Value::String(id) => id,
            other => other.to_string(),
        };

        Application {
            id,
            uuid: raw.uuid,
            subuuid: raw.subscription.map(|s| s.uuid).unwrap_or_default(),
            name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvironment {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub name: String,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub vcs: Vcs,
    #[serde(default)]
    pub configuration: Option<Configuration>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Vcs {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Configuration {
    #[serde(default)]
    pub php: Option<Php>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Php {
    #[serde(default)]
    pub version: String,
}

impl From<RawEnvironment> for Environment {
    fn from(raw: RawEnvironment) -> Self {
        let group = raw.ssh_url.split('.').next().unwrap_or_default().to_string();
        let php = raw
            .configuration
            .and_then(|c| c.php)
            .map(|p| p.version)
            .unwrap_or_default();

        Environment {
            display_name: format!("{}, {} (vcs: {})", raw.label, raw.name, raw.vcs.path),
            name: raw.name,
            git: raw.vcs.url,
            group,
            php,
            value: raw.id,
            vcs: raw.vcs.path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SshKey {
    pub label: String,
    pub public_key: String,
}
