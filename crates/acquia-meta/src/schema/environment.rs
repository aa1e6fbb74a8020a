//! Records returned by the remote directory

use serde::{Deserialize, Serialize};

/// A remote deployment target (dev, test, prod, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,

    #[serde(rename = "displayName", default)]
    pub display_name: String,

    /// Repository URL
    #[serde(default)]
    pub git: String,

    /// Site group, the `ssh_url` host up to its first `.`
    #[serde(default)]
    pub group: String,

    #[serde(default)]
    pub php: String,

    /// Remote environment ID
    #[serde(default)]
    pub value: String,

    /// Deployed branch or tag
    #[serde(default)]
    pub vcs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub uuid: String,
    #[serde(default)]
    pub subuuid: String,
    pub name: String,
}
