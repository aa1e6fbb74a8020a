//! `pull` and `push` tooling definitions

use crate::Result;
use crate::auth::auth_options;
use crate::environments::{Direction, NONE};
use acquia_meta::{
    AcquiaKey, ChoiceSource, PromptCondition, PromptDefault, PromptKind, PromptSpec,
    ToolingDefinition, ToolingOption, layer,
};
use std::collections::BTreeMap;

/// Credentials and identity known when the recipe is built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCredentials {
    pub key: Option<String>,
    pub secret: Option<String>,
    /// Account label shown instead of the key
    pub account: Option<String>,
    pub app_uuid: Option<String>,
}

struct TaskText {
    description: &'static str,
    cmd: &'static str,
    key_message: &'static str,
    /// (option, alias, weight, option description, prompt message)
    components: [(&'static str, &'static str, u32, &'static str, &'static str); 3],
}

const PULL: TaskText = TaskText {
    description: "Pull code, database and/or files from Acquia",
    cmd: "/helpers/acquia-pull.sh",
    key_message: "Choose an Acquia key",
    components: [
        ("code", "c", 200, "The environment from which to pull the code", "Pull code from?"),
        ("database", "d", 300, "The environment from which to pull the database", "Pull database from?"),
        ("files", "f", 400, "The environment from which to pull the files", "Pull files from?"),
    ],
};

const PUSH: TaskText = TaskText {
    description: "Push code, database and/or files to Acquia",
    cmd: "/helpers/acquia-push.sh",
    key_message: "Choose an Acquia API Client ID",
    components: [
        ("code", "c", 200, "The environment to which the local code will be pushed", "Push code to?"),
        ("database", "d", 300, "The environment to which the local database will be pushed", "Push database to?"),
        ("files", "f", 400, "The environment to which local files will be pushed", "Push files to?"),
    ],
};

fn component_default(direction: Direction, component: &str) -> PromptDefault {
    match (direction, component) {
        (Direction::Push, "database" | "files") => PromptDefault::Literal(NONE.to_string()),
        _ => PromptDefault::BestEnvironment,
    }
}

/// The task before credential options are layered on.
fn base_task(direction: Direction) -> ToolingDefinition {
    let text = match direction {
        Direction::Pull => &PULL,
        Direction::Push => &PUSH,
    };

    let mut options = BTreeMap::new();
    options.insert(
        "key".to_string(),
        ToolingOption {
            description: Some("An Acquia API Client ID".to_string()),
            passthrough: true,
            string: true,
            ..Default::default()
        }
        .with_prompt(
            PromptSpec::new(PromptKind::List, text.key_message)
                .with_choices(ChoiceSource::Static(Vec::new()))
                .when(PromptCondition::Never)
                .weight(100),
        ),
    );
    options.insert(
        "secret".to_string(),
        ToolingOption {
            description: Some("An Acquia API Client Secret".to_string()),
            passthrough: true,
            password: true,
            ..Default::default()
        },
    );

    for (name, alias, weight, description, message) in text.components {
        let prompt = PromptSpec::new(PromptKind::List, message)
            .with_choices(ChoiceSource::RemoteEnvironments)
            .with_default(component_default(direction, name))
            .weight(weight);
        options.insert(
            name.to_string(),
            ToolingOption::described(description)
                .passthrough()
                .with_alias(alias)
                .with_prompt(prompt),
        );
    }

    ToolingDefinition {
        service: Some("appserver".to_string()),
        description: Some(text.description.to_string()),
        cmd: Some(text.cmd.to_string()),
        level: Some("app".to_string()),
        stdio: vec!["inherit".into(), "pipe".into(), "pipe".into()],
        env: BTreeMap::from([("LANDO_DB_USER_TABLE".to_string(), "users".to_string())]),
        options,
        ..Default::default()
    }
}

/// Build the task for a direction with credential options layered on.
pub fn build_task(
    direction: Direction,
    credentials: &TaskCredentials,
    keys: &[AcquiaKey],
) -> Result<ToolingDefinition> {
    let mut task = base_task(direction);
    let auth = auth_options(
        credentials.key.as_deref(),
        credentials.secret.as_deref(),
        credentials.account.as_deref(),
        keys,
    );
    task.options = layer("task options", &task.options, &auth)?;
    Ok(task)
}

pub fn pull_task(credentials: &TaskCredentials, keys: &[AcquiaKey]) -> Result<ToolingDefinition> {
    build_task(Direction::Pull, credentials, keys)
}

pub fn push_task(credentials: &TaskCredentials, keys: &[AcquiaKey]) -> Result<ToolingDefinition> {
    build_task(Direction::Push, credentials, keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acquia_meta::Choice;
    use pretty_assertions::assert_eq;

    fn saved() -> Vec<AcquiaKey> {
        vec![AcquiaKey {
            label: "Work".into(),
            key: "k1".into(),
            secret: "s1".into(),
            uuid: "u1".into(),
        }]
    }

    #[test]
    fn test_pull_task_shape() {
        let task = pull_task(&TaskCredentials::default(), &[]).unwrap();

        assert_eq!(task.cmd.as_deref(), Some("/helpers/acquia-pull.sh"));
        assert_eq!(task.level.as_deref(), Some("app"));
        assert_eq!(task.stdio, vec!["inherit", "pipe", "pipe"]);
        assert_eq!(task.env["LANDO_DB_USER_TABLE"], "users");
        assert_eq!(task.options["database"].alias, vec!["d"]);

        let files = task.options["files"].interactive.as_ref().unwrap();
        assert_eq!(files.message.as_deref(), Some("Pull files from?"));
        assert_eq!(files.default, Some(PromptDefault::BestEnvironment));
        assert_eq!(files.weight, Some(400));
    }

    #[test]
    fn test_push_defaults() {
        let task = push_task(&TaskCredentials::default(), &[]).unwrap();

        let default = |name: &str| task.options[name].interactive.as_ref().unwrap().default.clone();
        assert_eq!(default("code"), Some(PromptDefault::BestEnvironment));
        assert_eq!(default("database"), Some(PromptDefault::Literal("none".into())));
        assert_eq!(default("files"), Some(PromptDefault::Literal("none".into())));
    }

    #[test]
    fn test_saved_keys_fill_chooser() {
        let task = pull_task(&TaskCredentials::default(), &saved()).unwrap();

        let key = task.options["key"].interactive.as_ref().unwrap();
        assert_eq!(key.message.as_deref(), Some("Choose an Acquia key"));
        assert_eq!(key.when, PromptCondition::HasSavedKeys);
        assert_eq!(
            key.choices,
            ChoiceSource::Static(vec![
                Choice::new("Work", "k1:s1"),
                Choice::new("add or refresh a key", "more"),
            ])
        );
        assert!(task.options["key"].passthrough);
        assert!(task.options.contains_key("key-entry"));
    }

    #[test]
    fn test_known_credentials_never_prompt_for_key() {
        let credentials = TaskCredentials {
            key: Some("k".into()),
            secret: Some("s".into()),
            account: Some("me@example.com".into()),
            app_uuid: None,
        };
        let task = push_task(&credentials, &saved()).unwrap();

        let key = &task.options["key"];
        assert_eq!(key.interactive.as_ref().unwrap().when, PromptCondition::Never);
        assert_eq!(key.default_description.as_deref(), Some("me@example.com"));
        assert!(task.options["secret"].interactive.is_none());
        assert!(!task.options.contains_key("key-entry"));
    }
}
