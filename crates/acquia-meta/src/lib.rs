//! Schema, defaults registry and layered merge for the Acquia recipe resolver.
//!
//! The types here describe what the recipe produces (service and tooling
//! definitions, interactive prompt specs) and what it consumes from the host
//! and the remote directory (saved keys, environments, applications).

pub mod defaults;
pub mod error;
pub mod merge;
pub mod schema;

pub use error::{Error, Result};
pub use merge::{deep_merge, layer, merge_layers};
pub use schema::{
    AcquiaKey, Application, Choice, ChoiceSource, DatabaseCredentials, Environment, KeyCache,
    PromptCondition, PromptDefault, PromptKind, PromptSpec, ServiceDefinition, ServiceOverrides,
    ToolingDefinition, ToolingOption, Toggle, Warning,
};
