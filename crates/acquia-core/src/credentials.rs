//! Saved credentials and local project metadata

use crate::Result;
use acquia_fs::{ConfigStore, NormalizedPath};
use acquia_meta::{AcquiaKey, Choice, KeyCache};
use serde_json::Value;
use std::collections::HashSet;

/// Chooser value that asks for a new key
pub const MORE_KEYS: &str = "more";

fn host_cache(home: &NormalizedPath) -> NormalizedPath {
    home.join(".acquia").join("cloud_api.conf")
}

fn app_cache(home: &NormalizedPath, app: &str) -> NormalizedPath {
    home.join(".lando")
        .join("config")
        .join(app)
        .join(".acquia")
        .join("cloud_api.conf")
}

/// Keys saved by the Acquia CLI on the host.
pub fn host_keys(home: &NormalizedPath) -> Result<Vec<AcquiaKey>> {
    Ok(KeyCache::load(&host_cache(home))?.into_keys())
}

/// Keys saved inside the app's appserver.
pub fn app_keys(home: &NormalizedPath, app: &str) -> Result<Vec<AcquiaKey>> {
    Ok(KeyCache::load(&app_cache(home, app))?.into_keys())
}

/// The key the app's Acquia CLI is currently logged in with.
pub fn active_app_key(home: &NormalizedPath, app: &str) -> Result<Option<AcquiaKey>> {
    Ok(KeyCache::load(&app_cache(home, app))?.active())
}

/// Merge key sources, keeping the first record per `uuid`, ordered by label.
pub fn sort_keys(sources: &[&[AcquiaKey]]) -> Vec<AcquiaKey> {
    let mut seen = HashSet::new();
    let mut keys: Vec<AcquiaKey> = sources
        .iter()
        .flat_map(|source| source.iter())
        .filter(|key| seen.insert(key.uuid.clone()))
        .cloned()
        .collect();
    keys.sort_by(|a, b| a.label.cmp(&b.label));
    keys
}

/// Key chooser entries valued `key:secret`, plus the entry for a new key.
pub fn key_choices(keys: &[AcquiaKey]) -> Vec<Choice> {
    keys.iter()
        .map(|key| Choice::new(key.label.clone(), key.combined()))
        .chain(std::iter::once(Choice::new("add or refresh a key", MORE_KEYS)))
        .collect()
}

/// Key chooser entries valued by key UUID, plus the entry for a new key.
pub fn acquia_key_choices(keys: &[AcquiaKey]) -> Vec<Choice> {
    keys.iter()
        .map(|key| Choice::new(key.label.clone(), key.uuid.clone()))
        .chain(std::iter::once(Choice::new("add a key", MORE_KEYS)))
        .collect()
}

/// The project's `composer.json`, if present.
pub fn composer_config(dir: &NormalizedPath) -> Result<Option<Value>> {
    Ok(ConfigStore::new().load_optional(&dir.join("composer.json"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(label: &str, key: &str, secret: &str, uuid: &str) -> AcquiaKey {
        AcquiaKey {
            label: label.into(),
            key: key.into(),
            secret: secret.into(),
            uuid: uuid.into(),
        }
    }

    #[test]
    fn test_key_choices() {
        let choices = key_choices(&[key("A", "k1", "s1", "u1")]);
        assert_eq!(
            choices,
            vec![
                Choice::new("A", "k1:s1"),
                Choice::new("add or refresh a key", "more"),
            ]
        );
    }

    #[test]
    fn test_key_choices_empty() {
        assert_eq!(
            key_choices(&[]),
            vec![Choice::new("add or refresh a key", "more")]
        );
    }

    #[test]
    fn test_acquia_key_choices() {
        let choices = acquia_key_choices(&[key("A", "k1", "s1", "u1")]);
        assert_eq!(choices[0], Choice::new("A", "u1"));
        assert_eq!(choices[1], Choice::new("add a key", "more"));
    }

    #[test]
    fn test_sort_keys_unique_by_uuid() {
        let app = [key("Zed", "k2", "app-secret", "u2")];
        let host = [
            key("Zed", "k2", "host-secret", "u2"),
            key("Alpha", "k1", "s1", "u1"),
        ];

        let keys = sort_keys(&[&app, &host]);

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].label, "Alpha");
        assert_eq!(keys[1].secret, "app-secret");
    }
}
