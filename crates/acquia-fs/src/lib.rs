//! Filesystem helpers for the Acquia recipe resolver
//!
//! Provides slash-normalized host paths, create-if-absent writes,
//! and format-agnostic loading of the JSON and YAML files the recipe reads
//! (credential caches, `.acquia-cli.yml`, `composer.json`, `.lando.yml`).

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigStore, Format};
pub use error::{Error, Result};
pub use path::NormalizedPath;
