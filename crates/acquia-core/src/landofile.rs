//! The app's `.lando.yml`
//!
//! Holds the recipe name, the recipe's `config` block and the app's own
//! top-level services, tooling and proxy routes. [`Landofile::context`]
//! gathers everything else the recipe needs from the host.

use crate::Result;
use crate::credentials::{active_app_key, app_keys, host_keys};
use crate::options::{AcquiaSettings, AppContext, AppMeta};
use crate::recipe::RecipeKind;
use crate::tooling::Tooling;
use acquia_fs::{ConfigStore, NormalizedPath};
use acquia_meta::ServiceDefinition;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const LANDOFILE: &str = ".lando.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Landofile {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,

    /// Recipe options as written by the user
    #[serde(default)]
    pub config: Map<String, Value>,

    #[serde(default)]
    pub services: BTreeMap<String, ServiceDefinition>,

    #[serde(default)]
    pub tooling: Tooling,

    #[serde(default)]
    pub proxy: BTreeMap<String, Vec<String>>,
}

impl Landofile {
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    pub fn recipe_kind(&self) -> Option<RecipeKind> {
        self.recipe.as_deref().and_then(RecipeKind::from_name)
    }

    /// Type of the app's own database service, if it declares one.
    pub fn database_type(&self) -> Option<String> {
        self.services.get("database")?.service_type.clone()
    }

    /// Recipe options with the Acquia settings taken out.
    pub fn recipe_options(&self) -> (Value, AcquiaSettings) {
        let mut config = self.config.clone();
        let settings = AcquiaSettings::extract(&mut config);
        (Value::Object(config), settings)
    }

    /// Host facts for this app: saved keys, the active key and the app's
    /// Acquia settings.
    pub fn context(&self, home: NormalizedPath) -> Result<AppContext> {
        let mut ctx = AppContext::new(self.name.clone(), home);
        ctx.database_type = self.database_type();
        ctx.host_keys = host_keys(&ctx.home)?;
        ctx.app_keys = app_keys(&ctx.home, &self.name)?;
        if let Some(active) = active_app_key(&ctx.home, &self.name)? {
            ctx.meta = AppMeta::from_key(&active);
        }
        ctx.settings = self.recipe_options().1;
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_recipe_options_strip_settings() {
        let landofile: Landofile = serde_json::from_value(json!({
            "name": "mysite",
            "recipe": "acquia",
            "config": {
                "php": "8.1",
                "ah_application_uuid": "abc-123",
                "build": {"run_scripts": false}
            }
        }))
        .unwrap();

        let (options, settings) = landofile.recipe_options();

        assert_eq!(options, json!({"php": "8.1"}));
        assert_eq!(settings.ah_application_uuid.as_deref(), Some("abc-123"));
        assert!(!settings.run_scripts);
        assert_eq!(landofile.recipe_kind(), Some(RecipeKind::Acquia));
    }

    #[test]
    fn test_database_type() {
        let landofile: Landofile = serde_json::from_value(json!({
            "services": {"database": {"type": "acquia-mysql:8.0"}}
        }))
        .unwrap();
        assert_eq!(landofile.database_type().as_deref(), Some("acquia-mysql:8.0"));
        assert!(Landofile::default().database_type().is_none());
    }
}
