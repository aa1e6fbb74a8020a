//! Saved Acquia API keys

use crate::Result;
use acquia_fs::{ConfigStore, Format, NormalizedPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An API client credential pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiaKey {
    #[serde(default)]
    pub label: String,

    /// Client ID; filled from the map key when read from a cache file
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub secret: String,

    #[serde(default)]
    pub uuid: String,
}

impl AcquiaKey {
    /// `key:secret`, the value a key chooser answers with
    pub fn combined(&self) -> String {
        format!("{}:{}", self.key, self.secret)
    }
}

/// `cloud_api.conf` as written by the Acquia CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyCache {
    #[serde(default)]
    pub keys: BTreeMap<String, AcquiaKey>,

    /// UUID of the key currently in use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acli_key: Option<String>,
}

impl KeyCache {
    /// Load a cache file; a missing file is an empty cache.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path, "No key cache");
            return Ok(Self::default());
        }
        Ok(ConfigStore::new().load_as(path, Format::Json)?)
    }

    /// Keys in map order, each stamped with its map key as `key`.
    pub fn into_keys(self) -> Vec<AcquiaKey> {
        self.keys
            .into_iter()
            .map(|(id, mut record)| {
                record.key = id;
                record
            })
            .collect()
    }

    /// The key whose `uuid` matches `acli_key`.
    pub fn active(&self) -> Option<AcquiaKey> {
        let active = self.acli_key.as_deref()?;
        self.keys
            .iter()
            .find(|(_, record)| record.uuid == active)
            .map(|(id, record)| AcquiaKey {
                key: id.clone(),
                ..record.clone()
            })
    }
}
