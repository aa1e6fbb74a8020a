//! Recipe options and host facts
//!
//! [`RecipeOptions`] is the single tree every pipeline step reads and
//! writes. [`AppContext`] carries what the host knows about the app that is
//! not part of the user's recipe config: where config templates live, the
//! proxy domain and ports, and the saved credentials.

use acquia_fs::NormalizedPath;
use acquia_meta::{AcquiaKey, ServiceDefinition, ToolingDefinition, Toggle};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Requested drush installation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrushRequest {
    /// `false` disables installation, `true` asks for the default
    Toggle(bool),
    Version(String),
    /// Bare numbers in YAML (`drush: 11`)
    Number(serde_json::Number),
}

impl DrushRequest {
    /// The requested version, `None` for the toggles.
    pub fn version(&self) -> Option<String> {
        match self {
            Self::Toggle(_) => None,
            Self::Version(version) => Some(version.clone()),
            Self::Number(number) => Some(number.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeOptions {
    /// App name, used for proxy hostnames
    #[serde(default)]
    pub app: String,

    /// Recipe name; doubles as the local database credentials
    #[serde(default)]
    pub recipe: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf_dest: Option<String>,

    /// Internal appserver build steps
    #[serde(default)]
    pub build: Vec<String>,

    #[serde(default)]
    pub build_root: Vec<String>,

    #[serde(default)]
    pub run_root: Vec<String>,

    #[serde(default)]
    pub composer: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer_version: Option<String>,

    /// Caller supplied config file paths by type
    #[serde(default)]
    pub config: BTreeMap<String, String>,

    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub default_files: BTreeMap<String, String>,

    #[serde(default)]
    pub php: String,

    #[serde(default)]
    pub tooling: BTreeMap<String, ToolingDefinition>,

    #[serde(default)]
    pub via: String,

    #[serde(default)]
    pub webroot: String,

    #[serde(default)]
    pub xdebug: Toggle,

    #[serde(default)]
    pub proxy: BTreeMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_service: Option<String>,

    #[serde(default)]
    pub drush_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drush: Option<DrushRequest>,

    #[serde(default)]
    pub services: BTreeMap<String, ServiceDefinition>,

    #[serde(default)]
    pub cache: bool,

    #[serde(default)]
    pub inbox: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_file: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecipeOptions {
    /// The appserver entry of `services`, created on first access.
    pub fn appserver_mut(&mut self) -> &mut ServiceDefinition {
        self.services.entry("appserver".to_string()).or_default()
    }

    pub fn conf_dest_path(&self) -> Option<NormalizedPath> {
        self.conf_dest.as_deref().map(NormalizedPath::new)
    }
}

/// Ports the proxy last bound to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyPorts {
    pub http: Option<u16>,
    pub https: Option<u16>,
}

/// Credentials and account label remembered for the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMeta {
    pub label: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
}

impl AppMeta {
    pub fn from_key(key: &AcquiaKey) -> Self {
        Self {
            label: Some(key.label.clone()).filter(|s| !s.is_empty()),
            key: Some(key.key.clone()).filter(|s| !s.is_empty()),
            secret: Some(key.secret.clone()).filter(|s| !s.is_empty()),
        }
    }
}

/// Acquia settings read from the app's recipe config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiaSettings {
    #[serde(default = "default_acli_version")]
    pub acli_version: String,

    #[serde(default)]
    pub ah_application_uuid: Option<String>,

    #[serde(default)]
    pub ah_site_group: Option<String>,

    #[serde(default = "default_true")]
    pub run_scripts: bool,
}

fn default_acli_version() -> String {
    "latest".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AcquiaSettings {
    fn default() -> Self {
        Self {
            acli_version: default_acli_version(),
            ah_application_uuid: None,
            ah_site_group: None,
            run_scripts: true,
        }
    }
}

impl AcquiaSettings {
    /// Pull the Acquia keys out of a raw recipe config.
    ///
    /// `build` is an object (`{run_scripts: false}`) in Acquia app configs but
    /// a list of build steps in recipe options, so the object form is taken
    /// out here and only a list is left behind.
    pub fn extract(config: &mut Map<String, Value>) -> Self {
        let mut settings = Self::default();

        if let Some(Value::String(version)) = config.remove("acli_version") {
            settings.acli_version = version;
        }
        if let Some(Value::String(uuid)) = config.remove("ah_application_uuid") {
            settings.ah_application_uuid = Some(uuid);
        }
        if let Some(Value::String(group)) = config.remove("ah_site_group") {
            settings.ah_site_group = Some(group);
        }
        if let Some(Value::Object(build)) = config.get("build") {
            if let Some(Value::Bool(run_scripts)) = build.get("run_scripts") {
                settings.run_scripts = *run_scripts;
            }
            config.remove("build");
        }

        settings
    }
}

/// Host facts about the app being resolved
#[derive(Debug, Clone, PartialEq)]
pub struct AppContext {
    pub name: String,
    pub domain: String,
    pub home: NormalizedPath,

    /// Directory holding the config templates (`php.ini`, `mysql8.cnf`, ...)
    pub conf_dest: Option<NormalizedPath>,

    /// `services.database.type` of the app, when it sets one
    pub database_type: Option<String>,

    pub proxy_last_ports: Option<ProxyPorts>,

    /// Keys from `~/.acquia/cloud_api.conf`
    pub host_keys: Vec<AcquiaKey>,

    /// Keys from the app's own credential cache
    pub app_keys: Vec<AcquiaKey>,

    pub meta: AppMeta,
    pub settings: AcquiaSettings,
}

impl AppContext {
    pub fn new(name: impl Into<String>, home: NormalizedPath) -> Self {
        Self {
            name: name.into(),
            domain: acquia_meta::defaults::DEFAULT_DOMAIN.to_string(),
            home,
            conf_dest: None,
            database_type: None,
            proxy_last_ports: None,
            host_keys: Vec::new(),
            app_keys: Vec::new(),
            meta: AppMeta::default(),
            settings: AcquiaSettings::default(),
        }
    }
}
