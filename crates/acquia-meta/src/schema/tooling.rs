//! Tooling (CLI command) definitions

use super::prompt::PromptSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A named command exposed to the user, run inside a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolingDefinition {
    /// Target service; `:host` lets the user pick the service with `--host`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Scope of the command; tasks use `app`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stdio: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, ToolingOption>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToolingDefinition {
    pub fn new(service: &str, cmd: &str) -> Self {
        Self {
            service: Some(service.to_string()),
            cmd: Some(cmd.to_string()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn with_option(mut self, name: &str, option: ToolingOption) -> Self {
        self.options.insert(name.to_string(), option);
        self
    }
}

/// A flag or argument accepted by a tooling command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolingOption {
    #[serde(
        default,
        alias = "describe",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// What to show instead of the default (masked secrets, key labels)
    #[serde(
        rename = "defaultDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_description: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub boolean: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub string: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub password: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub passthrough: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<PromptSpec>,
}

impl ToolingOption {
    pub fn described(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias.push(alias.to_string());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    pub fn with_prompt(mut self, prompt: PromptSpec) -> Self {
        self.interactive = Some(prompt);
        self
    }
}
