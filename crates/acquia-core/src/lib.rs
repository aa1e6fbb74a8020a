//! Recipe resolution and pull/push prompt flows for Acquia apps
//!
//! # Recipe
//!
//! [`recipe::resolve`] turns a user's recipe options into the services,
//! tooling and proxy routes the orchestrator runs. The pieces it is built
//! from are usable on their own:
//!
//! - [`files`]: config template selection and pruning
//! - [`services`]: appserver and database definitions
//! - [`tooling`]: baseline and database tooling
//! - [`drush`]: composer or phar drush installs
//! - [`proxy`]: proxy routes and the drush site URL
//!
//! # Pull and push
//!
//! [`tasks`] builds the `pull`/`push` tooling entries, [`flow`] walks their
//! prompts, and [`environments::EnvironmentResolver`] fetches and caches the
//! environment choices from the remote directory.

pub mod acli;
pub mod auth;
pub mod credentials;
pub mod drush;
pub mod environments;
pub mod error;
pub mod files;
pub mod flow;
pub mod landofile;
pub mod options;
pub mod prompt;
pub mod proxy;
pub mod recipe;
pub mod services;
pub mod tasks;
pub mod tooling;

pub use environments::{
    Credentials, Direction, EnvironmentDirectory, EnvironmentResolver, ResolverState,
};
pub use error::{Error, Result};
pub use flow::{FlowContext, Prompter, collect_answers, default_flow};
pub use landofile::Landofile;
pub use options::{
    AcquiaSettings, AppContext, AppMeta, DrushRequest, ProxyPorts, RecipeOptions,
};
pub use prompt::Answers;
pub use recipe::{RecipeKind, ResolvedRecipe, resolve};
pub use tasks::{TaskCredentials, pull_task, push_task};
