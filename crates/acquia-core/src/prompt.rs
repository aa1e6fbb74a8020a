//! Prompt answers and visibility rules
//!
//! [`Answers`] is an immutable record: recording an answer returns a new
//! record. Whether a prompt is shown is decided by [`is_shown`] from its
//! [`PromptCondition`] and the answers so far.

use crate::credentials::MORE_KEYS;
use acquia_meta::{Choice, PromptCondition, PromptSpec, ToolingOption};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: BTreeMap<String, String>,
    needs_secret_entry: bool,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn key(&self) -> Option<&str> {
        self.get("key")
    }

    pub fn secret(&self) -> Option<&str> {
        self.get("secret")
    }

    /// Manual key entry followed choosing `more`, so a secret is still owed.
    pub fn needs_secret_entry(&self) -> bool {
        self.needs_secret_entry
    }

    /// A new record with `name` answered.
    pub fn with(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if name == "key" && self.key() == Some(MORE_KEYS) {
            next.needs_secret_entry = true;
        }
        next.values.insert(name.to_string(), value.into());
        next
    }

    /// A new record with a combined `key:secret` answer split in two.
    pub fn split_credentials(&self) -> Self {
        let Some((key, secret)) = self.key().and_then(split_key_secret) else {
            return self.clone();
        };
        let mut next = self.clone();
        next.values.insert("key".to_string(), key.to_string());
        next.values.insert("secret".to_string(), secret.to_string());
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            needs_secret_entry: false,
        }
    }
}

/// Split `key:secret`; anything but exactly two parts is not a pair.
pub fn split_key_secret(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(secret), None) => Some((key, secret)),
        _ => None,
    }
}

/// Evaluate a visibility rule.
pub fn condition_met(condition: PromptCondition, answers: &Answers, has_saved_keys: bool) -> bool {
    match condition {
        PromptCondition::Always => true,
        PromptCondition::Never => false,
        PromptCondition::HasSavedKeys => has_saved_keys,
        PromptCondition::KeyEntryNeeded => !has_saved_keys || answers.key() == Some(MORE_KEYS),
        PromptCondition::SecretNeeded => {
            answers.needs_secret_entry()
                || answers.key().is_none_or(|key| !key.contains(':'))
        }
    }
}

pub fn is_shown(spec: &PromptSpec, answers: &Answers, has_saved_keys: bool) -> bool {
    condition_met(spec.when, answers, has_saved_keys)
}

/// Name the answer is stored under.
pub fn answer_name<'a>(option: &'a str, spec: &'a PromptSpec) -> &'a str {
    spec.name.as_deref().unwrap_or(option)
}

/// Interactive options in prompt order (by weight, then name).
pub fn ordered_prompts(
    options: &BTreeMap<String, ToolingOption>,
) -> Vec<(&str, &PromptSpec)> {
    let mut prompts: Vec<(&str, &PromptSpec)> = options
        .iter()
        .filter_map(|(name, option)| option.interactive.as_ref().map(|p| (name.as_str(), p)))
        .collect();
    prompts.sort_by_key(|(name, spec)| (spec.weight.unwrap_or(u32::MAX), *name));
    prompts
}

/// Position of `value` among `choices`.
pub fn choice_index(choices: &[Choice], value: &str) -> Option<usize> {
    choices.iter().position(|c| c.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("k:s", Some(("k", "s")))]
    #[case("k", None)]
    #[case("a:b:c", None)]
    #[case(":", Some(("", "")))]
    fn test_split_key_secret(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_key_secret(input), expected);
    }

    #[test]
    fn test_answers_are_immutable() {
        let first = Answers::new();
        let second = first.with("code", "dev");
        assert!(first.get("code").is_none());
        assert_eq!(second.get("code"), Some("dev"));
    }

    #[test]
    fn test_split_credentials() {
        let answers = Answers::new().with("key", "abc:xyz").split_credentials();
        assert_eq!(answers.key(), Some("abc"));
        assert_eq!(answers.secret(), Some("xyz"));
    }

    #[test]
    fn test_split_leaves_partial_key() {
        let answers = Answers::new().with("key", "abc").split_credentials();
        assert_eq!(answers.key(), Some("abc"));
        assert!(answers.secret().is_none());
    }

    #[test]
    fn test_key_entry_after_more_needs_secret() {
        let answers = Answers::new().with("key", "more");
        assert!(condition_met(PromptCondition::KeyEntryNeeded, &answers, true));

        let answers = answers.with("key", "new-id");
        assert!(answers.needs_secret_entry());
        assert!(condition_met(PromptCondition::SecretNeeded, &answers, true));
    }

    #[test]
    fn test_chosen_pair_skips_secret() {
        let answers = Answers::new().with("key", "k1:s1");
        assert!(!condition_met(PromptCondition::KeyEntryNeeded, &answers, true));
        assert!(!condition_met(PromptCondition::SecretNeeded, &answers, true));
    }

    #[test]
    fn test_no_saved_keys() {
        let answers = Answers::new();
        assert!(!condition_met(PromptCondition::HasSavedKeys, &answers, false));
        assert!(condition_met(PromptCondition::KeyEntryNeeded, &answers, false));
        assert!(condition_met(PromptCondition::SecretNeeded, &answers, false));
    }

    #[test]
    fn test_ordered_prompts() {
        use acquia_meta::PromptKind;

        let mut options = BTreeMap::new();
        options.insert(
            "code".to_string(),
            ToolingOption::default().with_prompt(PromptSpec::new(PromptKind::List, "c").weight(200)),
        );
        options.insert(
            "key".to_string(),
            ToolingOption::default().with_prompt(PromptSpec::new(PromptKind::List, "k").weight(100)),
        );
        options.insert("plain".to_string(), ToolingOption::described("no prompt"));

        let names: Vec<&str> = ordered_prompts(&options).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["key", "code"]);
    }
}
