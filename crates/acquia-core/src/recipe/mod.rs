//! Recipe resolution
//!
//! A recipe is a fixed pipeline of transforms over one [`RecipeOptions`]
//! tree. Option defaults are layered first (base defaults, then the Acquia
//! defaults for [`RecipeKind::Acquia`], then the user's options), the Acquia
//! transforms run next, and the base pipeline finishes the tree:
//!
//! drush → legacy environment → default files → services → tooling → proxy → drush URI

pub mod acquia;
pub mod base;

use crate::landofile::Landofile;
use crate::options::{AppContext, RecipeOptions};
use crate::tooling::Tooling;
use crate::{Error, Result};
use acquia_meta::{ServiceDefinition, Warning, defaults, layer, merge_layers};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type Files = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeKind {
    /// Appserver, database and tooling only
    #[serde(alias = "_acquia-base")]
    AcquiaBase,
    /// Base plus Acquia CLI, cache, inbox and pull/push
    Acquia,
}

impl RecipeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "acquia" => Some(Self::Acquia),
            "acquia-base" | "_acquia-base" => Some(Self::AcquiaBase),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AcquiaBase => "acquia-base",
            Self::Acquia => "acquia",
        }
    }

    /// Layered option defaults for this recipe.
    pub fn defaults(self) -> Value {
        match self {
            Self::AcquiaBase => defaults::base_recipe(),
            Self::Acquia => merge_layers([defaults::base_recipe(), defaults::acquia_recipe()]),
        }
    }
}

/// What the recipe hands to the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRecipe {
    pub services: BTreeMap<String, ServiceDefinition>,
    pub tooling: Tooling,
    pub proxy: BTreeMap<String, Vec<String>>,
    pub default_files: Files,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_file: Vec<String>,
    pub webroot: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl ResolvedRecipe {
    fn from_options(options: RecipeOptions, warnings: Vec<Warning>) -> Self {
        Self {
            services: options.services,
            tooling: options.tooling,
            proxy: options.proxy,
            default_files: options.default_files,
            env_file: options.env_file,
            webroot: options.webroot,
            warnings,
        }
    }

    /// Layer the app's own top-level `services`, `tooling` and `proxy` over
    /// the recipe output.
    pub fn with_landofile(mut self, landofile: &Landofile) -> Result<Self> {
        self.services = layer("services", &self.services, &landofile.services)?;
        self.tooling = layer("tooling", &self.tooling, &landofile.tooling)?;
        self.proxy
            .extend(landofile.proxy.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(self)
    }
}

fn files_of(value: Option<&Value>) -> Result<Files> {
    match value {
        Some(value) => serde_json::from_value(value.clone()).map_err(Error::InvalidOptions),
        None => Ok(Files::new()),
    }
}

/// Resolve a recipe from the user's options.
///
/// `user` is the recipe's `config` block as written by the user, already
/// stripped of the Acquia settings (see [`crate::AcquiaSettings::extract`]).
pub fn resolve(kind: RecipeKind, user: Value, ctx: &AppContext) -> Result<ResolvedRecipe> {
    let defaults = kind.defaults();
    let registry_files = files_of(defaults.get("default_files"))?;
    let caller_files = files_of(user.get("default_files"))?;

    let merged = merge_layers([defaults, user]);
    let mut options: RecipeOptions =
        serde_json::from_value(merged).map_err(Error::InvalidOptions)?;

    if options.app.is_empty() {
        options.app = ctx.name.clone();
    }
    if options.recipe.is_empty() {
        options.recipe = kind.name().to_string();
    }
    if options.conf_dest.is_none() {
        options.conf_dest = ctx.conf_dest.as_ref().map(|dir| dir.as_str().to_string());
    }

    tracing::debug!(recipe = kind.name(), app = %options.app, "Resolving recipe");

    if kind == RecipeKind::Acquia {
        acquia::prepare(&mut options, ctx)?;
    }
    let warnings = base::build(&mut options, ctx, &registry_files, &caller_files)?;

    for warning in &warnings {
        tracing::warn!(title = %warning.title, "Recipe warning");
    }

    Ok(ResolvedRecipe::from_options(options, warnings))
}
