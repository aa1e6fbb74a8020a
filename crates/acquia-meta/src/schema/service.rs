//! Service definitions handed to the orchestrator
//!
//! One entry per infrastructure component (appserver, database, cache,
//! inbox). Unknown keys supplied by the user are preserved in `extra` so they
//! pass through the merge untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A boolean switch that some services also accept as a string or number
/// (`xdebug: "debug,develop"`, `portforward: 3307`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    Enabled(bool),
    Port(u16),
    Mode(String),
}

impl Default for Toggle {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

/// Fixed local credential triple for the database service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCredentials {
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseCredentials {
    /// Use one name for user, password and database.
    pub fn uniform(name: &str) -> Self {
        Self {
            user: name.to_string(),
            password: name.to_string(),
            database: name.to_string(),
        }
    }
}

/// Container-level overrides applied on top of the generated service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// `<builder>:<version>`, e.g. `acquia-php:8.3`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    /// User build steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build: Vec<String>,

    /// Recipe build steps, run before user steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build_internal: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build_as_root_internal: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_as_root_internal: Vec<String>,

    /// Global composer requirements: package => constraint
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub composer: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer_version: Option<String>,

    /// Config file map: type (`php`, `vhosts`, `database`, ...) => host path
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xdebug: Option<Toggle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webroot: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portforward: Option<Toggle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creds: Option<DatabaseCredentials>,

    /// Memcached memory in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u32>,

    /// Services whose mail is captured by the inbox
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hogfrom: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ServiceOverrides>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceDefinition {
    pub fn of_type(service_type: impl Into<String>) -> Self {
        Self {
            service_type: Some(service_type.into()),
            ..Default::default()
        }
    }

    /// Overrides, created on first access.
    pub fn overrides_mut(&mut self) -> &mut ServiceOverrides {
        self.overrides.get_or_insert_with(ServiceOverrides::default)
    }

    /// Environment variables from the overrides, if any.
    pub fn environment(&self) -> Option<&BTreeMap<String, String>> {
        self.overrides.as_ref().map(|o| &o.environment)
    }
}
