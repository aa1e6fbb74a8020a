//! Interactive prompt specifications
//!
//! Prompts are pure data. Whether a prompt is shown is a [`PromptCondition`]
//! evaluated by the caller against the answers collected so far; the list of
//! choices may be static or resolved from the remote directory at prompt time.
//!
//! Fields holding their default value are not serialized, so a spec that only
//! sets a `message` layers over a recipe prompt without resetting its kind,
//! choices or rule.

use serde::{Deserialize, Serialize};

/// Kind of input widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[default]
    List,
    Input,
    Password,
}

/// A selectable entry: `name` is displayed, `value` is stored as the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Where a list prompt gets its choices from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceSource {
    Static(Vec<Choice>),
    /// Environments of the current application, fetched lazily
    RemoteEnvironments,
}

impl Default for ChoiceSource {
    fn default() -> Self {
        Self::Static(Vec::new())
    }
}

/// Rule deciding whether a prompt is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptCondition {
    #[default]
    Always,
    Never,
    /// At least one saved key exists
    HasSavedKeys,
    /// No saved keys, or the key chooser answered `more`
    KeyEntryNeeded,
    /// Manual key entry was used, or the key answer carries no secret
    SecretNeeded,
}

/// Default answer of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptDefault {
    Literal(String),
    /// `dev` when present, else the first environment
    BestEnvironment,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptSpec {
    #[serde(rename = "type", default, skip_serializing_if = "is_default")]
    pub kind: PromptKind,

    /// Answer name override; `key-entry` stores its answer under `key`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "is_default")]
    pub choices: ChoiceSource,

    #[serde(default, skip_serializing_if = "is_default")]
    pub when: PromptCondition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PromptDefault>,
}

impl PromptSpec {
    pub fn new(kind: PromptKind, message: &str) -> Self {
        Self {
            kind,
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_choices(mut self, choices: ChoiceSource) -> Self {
        self.choices = choices;
        self
    }

    pub fn when(mut self, condition: PromptCondition) -> Self {
        self.when = condition;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_default(mut self, default: PromptDefault) -> Self {
        self.default = Some(default);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_serializes_rule_and_source() {
        let spec = PromptSpec::new(PromptKind::List, "Pull code from?")
            .with_choices(ChoiceSource::RemoteEnvironments)
            .with_default(PromptDefault::BestEnvironment)
            .weight(200);

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Pull code from?",
                "choices": "remote-environments",
                "weight": 200,
                "default": "best-environment"
            })
        );
    }

    #[test]
    fn test_static_choices() {
        let spec: PromptSpec = serde_json::from_value(json!({
            "type": "list",
            "choices": {"static": [{"name": "A", "value": "k1:s1"}]},
            "when": "has-saved-keys"
        }))
        .unwrap();

        assert_eq!(
            spec.choices,
            ChoiceSource::Static(vec![Choice::new("A", "k1:s1")])
        );
        assert_eq!(spec.when, PromptCondition::HasSavedKeys);
    }

    #[test]
    fn test_message_only_overlay_keeps_rule_and_source() {
        let base = PromptSpec::new(PromptKind::Password, "Secret?")
            .with_choices(ChoiceSource::RemoteEnvironments)
            .when(PromptCondition::SecretNeeded);
        let overlay = PromptSpec {
            message: Some("Your secret?".into()),
            ..Default::default()
        };

        let merged = crate::merge::layer("prompt", &base, &overlay).unwrap();

        assert_eq!(merged.kind, PromptKind::Password);
        assert_eq!(merged.choices, ChoiceSource::RemoteEnvironments);
        assert_eq!(merged.when, PromptCondition::SecretNeeded);
        assert_eq!(merged.message.as_deref(), Some("Your secret?"));
    }
}
