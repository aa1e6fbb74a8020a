//! Credential options for the pull/push tasks
//!
//! With a key and secret already known the options just carry them as
//! defaults. Otherwise the user chooses a saved key or enters one by hand.

use crate::credentials::key_choices;
use acquia_meta::{
    AcquiaKey, ChoiceSource, PromptCondition, PromptKind, PromptSpec, ToolingOption,
};
use std::collections::BTreeMap;

pub type AuthOptions = BTreeMap<String, ToolingOption>;

/// Options when both credentials are known.
pub fn non_interactive_options(key: &str, secret: &str, label: Option<&str>) -> AuthOptions {
    let key_option = ToolingOption {
        default: Some(key.into()),
        default_description: label.map(str::to_string),
        ..Default::default()
    };
    let secret_option = ToolingOption {
        default: Some(secret.into()),
        default_description: Some("***".to_string()),
        ..Default::default()
    };

    AuthOptions::from([
        ("key".to_string(), key_option),
        ("secret".to_string(), secret_option),
    ])
}

/// Key chooser, manual key entry and secret prompts.
pub fn interactive_options(keys: &[AcquiaKey]) -> AuthOptions {
    let chooser = PromptSpec {
        choices: ChoiceSource::Static(key_choices(keys)),
        when: PromptCondition::HasSavedKeys,
        weight: Some(100),
        ..Default::default()
    };
    let entry = PromptSpec::new(PromptKind::Input, "Enter an Acquia API Client ID")
        .named("key")
        .when(PromptCondition::KeyEntryNeeded)
        .weight(110);
    let secret = PromptSpec::new(PromptKind::Password, "Enter an Acquia API Client Secret")
        .when(PromptCondition::SecretNeeded)
        .weight(120);

    AuthOptions::from([
        ("key".to_string(), ToolingOption::default().with_prompt(chooser)),
        (
            "key-entry".to_string(),
            ToolingOption {
                hidden: true,
                ..Default::default()
            }
            .with_prompt(entry),
        ),
        ("secret".to_string(), ToolingOption::default().with_prompt(secret)),
    ])
}

/// Pick the option set for the credentials at hand.
pub fn auth_options(
    key: Option<&str>,
    secret: Option<&str>,
    label: Option<&str>,
    keys: &[AcquiaKey],
) -> AuthOptions {
    match (key.filter(|k| !k.is_empty()), secret.filter(|s| !s.is_empty())) {
        (Some(key), Some(secret)) => non_interactive_options(key, secret, label),
        _ => interactive_options(keys),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_credentials_are_defaults() {
        let options = auth_options(Some("k"), Some("s"), Some("me@example.com"), &[]);

        assert_eq!(options["key"].default, Some(json!("k")));
        assert_eq!(options["key"].default_description.as_deref(), Some("me@example.com"));
        assert_eq!(options["secret"].default_description.as_deref(), Some("***"));
        assert!(options["key"].interactive.is_none());
        assert!(!options.contains_key("key-entry"));
    }

    #[test]
    fn test_partial_credentials_prompt() {
        let options = auth_options(Some("k"), None, None, &[]);

        let entry = options["key-entry"].interactive.as_ref().unwrap();
        assert!(options["key-entry"].hidden);
        assert_eq!(entry.name.as_deref(), Some("key"));
        assert_eq!(entry.kind, PromptKind::Input);
        assert_eq!(entry.when, PromptCondition::KeyEntryNeeded);

        let secret = options["secret"].interactive.as_ref().unwrap();
        assert_eq!(secret.kind, PromptKind::Password);
        assert_eq!(secret.weight, Some(120));
    }
}
