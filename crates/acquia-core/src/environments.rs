//! Remote environment choices for pull and push
//!
//! The [`EnvironmentResolver`] authenticates lazily on the first request for
//! an application's environments, maps them to prompt choices and caches the
//! result per application UUID for the rest of the invocation.

use crate::prompt::Answers;
use crate::{Error, Result};
use acquia_cloud::AcquiaApi;
use acquia_meta::{Choice, Environment};
use async_trait::async_trait;
use std::collections::HashMap;

/// Choice appended to every environment list
pub const NONE: &str = "none";

/// Environment push never offers
pub const PROTECTED_ENVIRONMENT: &str = "prod";

/// Preferred default environment
pub const PREFERRED_ENVIRONMENT: &str = "dev";

/// Source of an application's environments
#[async_trait]
pub trait EnvironmentDirectory: Send {
    /// Exchange credentials for a fresh token.
    async fn authenticate(&mut self, key: &str, secret: &str) -> Result<()>;

    async fn environments(&mut self, app_uuid: &str) -> Result<Vec<Environment>>;
}

#[async_trait]
impl EnvironmentDirectory for AcquiaApi {
    async fn authenticate(&mut self, key: &str, secret: &str) -> Result<()> {
        self.auth(key, secret, true, true).await?;
        Ok(())
    }

    async fn environments(&mut self, app_uuid: &str) -> Result<Vec<Environment>> {
        Ok(self.get_environments(app_uuid).await?.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pull,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    NoCredentials,
    Authenticating,
    Authenticated,
    EnvironmentsFetched,
}

/// Key and secret to fall back on when the answers carry none
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key: Option<String>,
    pub secret: Option<String>,
}

pub struct EnvironmentResolver<D> {
    directory: D,
    direction: Direction,
    state: ResolverState,
    authenticated_as: Option<String>,
    cache: HashMap<String, Vec<Choice>>,
}

impl<D: EnvironmentDirectory> EnvironmentResolver<D> {
    pub fn new(directory: D, direction: Direction) -> Self {
        Self {
            directory,
            direction,
            state: ResolverState::NoCredentials,
            authenticated_as: None,
            cache: HashMap::new(),
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Cached choices for an application, if already fetched.
    pub fn cached(&self, app_uuid: &str) -> Option<&[Choice]> {
        self.cache.get(app_uuid).map(Vec::as_slice)
    }

    /// Environment choices for an application.
    ///
    /// Credentials come from the answers (a combined `key:secret` answer is
    /// split first), falling back to `fallback`.
    pub async fn choices(
        &mut self,
        answers: &Answers,
        fallback: &Credentials,
        app_uuid: &str,
    ) -> Result<Vec<Choice>> {
        if let Some(cached) = self.cache.get(app_uuid) {
            return Ok(cached.clone());
        }

        let answers = answers.split_credentials();
        let key = answers.key().or(fallback.key.as_deref());
        let secret = answers.secret().or(fallback.secret.as_deref());
        let (Some(key), Some(secret)) = (key, secret) else {
            return Err(Error::MissingCredentials);
        };

        if self.authenticated_as.as_deref() != Some(key) {
            self.state = ResolverState::Authenticating;
            tracing::debug!(key, "Authenticating for environment list");
            if let Err(err) = self.directory.authenticate(key, secret).await {
                self.state = ResolverState::NoCredentials;
                self.authenticated_as = None;
                return Err(err);
            }
            self.authenticated_as = Some(key.to_string());
            self.state = ResolverState::Authenticated;
        }

        let environments = self.directory.environments(app_uuid).await?;
        let choices = environment_choices(&environments, self.direction);
        tracing::debug!(app_uuid, count = choices.len(), "Fetched environments");

        self.cache.insert(app_uuid.to_string(), choices.clone());
        self.state = ResolverState::EnvironmentsFetched;
        Ok(choices)
    }
}

/// Map environments to choices (`name` = display name, `value` = env name)
/// and append `none`. Push never offers `prod`.
pub fn environment_choices(environments: &[Environment], direction: Direction) -> Vec<Choice> {
    environments
        .iter()
        .filter(|env| direction == Direction::Pull || env.name != PROTECTED_ENVIRONMENT)
        .map(|env| Choice::new(env.display_name.clone(), env.name.clone()))
        .chain(std::iter::once(Choice::new(NONE, NONE)))
        .collect()
}

/// `dev` when offered, else the first choice.
pub fn best_environment(choices: &[Choice]) -> Option<&Choice> {
    choices
        .iter()
        .find(|c| c.value == PREFERRED_ENVIRONMENT)
        .or_else(|| choices.first())
}

/// Default answer for a component prompt (`code`, `database`, `files`).
///
/// Push only defaults code to an environment; database and files default
/// to `none`.
pub fn default_choice(direction: Direction, component: &str, choices: &[Choice]) -> Option<String> {
    match (direction, component) {
        (Direction::Push, "database" | "files") => Some(NONE.to_string()),
        _ => best_environment(choices).map(|c| c.value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env(name: &str) -> Environment {
        Environment {
            name: name.into(),
            display_name: format!("{name} display"),
            ..Default::default()
        }
    }

    #[test]
    fn test_push_excludes_prod() {
        let envs = [env("dev"), env("test"), env("prod")];

        let pull: Vec<String> = environment_choices(&envs, Direction::Pull)
            .into_iter()
            .map(|c| c.value)
            .collect();
        let push: Vec<String> = environment_choices(&envs, Direction::Push)
            .into_iter()
            .map(|c| c.value)
            .collect();

        assert_eq!(pull, vec!["dev", "test", "prod", "none"]);
        assert_eq!(push, vec!["dev", "test", "none"]);
    }

    #[test]
    fn test_best_environment() {
        let with_dev = environment_choices(&[env("test"), env("dev")], Direction::Pull);
        assert_eq!(best_environment(&with_dev).map(|c| c.value.as_str()), Some("dev"));

        let without_dev = environment_choices(&[env("stage"), env("test")], Direction::Pull);
        assert_eq!(best_environment(&without_dev).map(|c| c.value.as_str()), Some("stage"));

        assert!(best_environment(&[]).is_none());
    }

    #[test]
    fn test_default_choice() {
        let choices = environment_choices(&[env("test"), env("dev")], Direction::Push);

        assert_eq!(default_choice(Direction::Push, "code", &choices).as_deref(), Some("dev"));
        assert_eq!(default_choice(Direction::Push, "database", &choices).as_deref(), Some("none"));
        assert_eq!(default_choice(Direction::Push, "files", &choices).as_deref(), Some("none"));
        assert_eq!(default_choice(Direction::Pull, "files", &choices).as_deref(), Some("dev"));
    }
}
