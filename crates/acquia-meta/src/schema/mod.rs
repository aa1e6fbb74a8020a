//! Typed schema for recipe output and host/remote input
//!
//! All definition types use optional fields that are skipped when unset, so
//! the same struct can describe a complete definition or a partial overlay
//! that is fed through [`crate::merge::layer`].

mod environment;
mod key;
mod prompt;
mod service;
mod tooling;
mod warning;

pub use environment::{Application, Environment};
pub use key::{AcquiaKey, KeyCache};
pub use prompt::{Choice, ChoiceSource, PromptCondition, PromptDefault, PromptKind, PromptSpec};
pub use service::{DatabaseCredentials, ServiceDefinition, ServiceOverrides, Toggle};
pub use tooling::{ToolingDefinition, ToolingOption};
pub use warning::Warning;
