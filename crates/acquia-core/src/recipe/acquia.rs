//! Acquia transforms, run before the base pipeline

use crate::Result;
use crate::acli::provision_steps;
use crate::credentials::sort_keys;
use crate::options::{AcquiaSettings, AppContext, RecipeOptions};
use crate::services::APPSERVER;
use crate::tasks::{TaskCredentials, pull_task, push_task};
use crate::tooling::Tooling;
use acquia_meta::{ServiceDefinition, ToolingDefinition, Toggle};
use std::collections::BTreeMap;

/// Database used when the app leaves `database` empty
pub const DEFAULT_DATABASE: &str = "mysql:8.0";

pub const CACHE_SERVICE: &str = "acquia-memcached:1";
pub const INBOX_SERVICE: &str = "acquia-mailhog:v1.0.0";

/// Local database credentials the Acquia CLI expects
const ACLI_DB_CREDENTIAL: &str = "acquia";

/// Environment of the appserver. Unset identifiers are left out.
pub fn acquia_environment(settings: &AcquiaSettings) -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();
    if let Some(uuid) = &settings.ah_application_uuid {
        env.insert("AH_SITE_UUID".to_string(), uuid.clone());
    }
    if let Some(group) = &settings.ah_site_group {
        env.insert("AH_SITE_GROUP".to_string(), group.clone());
    }
    env.insert("AH_SITE_ENVIRONMENT".to_string(), "LANDO".to_string());
    env.insert("ACLI_DB_HOST".to_string(), "database".to_string());
    for var in ["ACLI_DB_USER", "ACLI_DB_PASSWORD", "ACLI_DB_NAME"] {
        env.insert(var.to_string(), ACLI_DB_CREDENTIAL.to_string());
    }
    env
}

/// Container path of the site settings include for a site group.
pub fn settings_include(group: &str) -> String {
    format!("/var/www/site-php/{group}/{group}-settings.inc")
}

pub fn cache_service() -> ServiceDefinition {
    ServiceDefinition {
        portforward: Some(Toggle::Enabled(true)),
        mem: Some(64),
        ..ServiceDefinition::of_type(CACHE_SERVICE)
    }
}

pub fn inbox_service() -> ServiceDefinition {
    ServiceDefinition {
        portforward: Some(Toggle::Enabled(true)),
        hogfrom: vec![APPSERVER.to_string()],
        ..ServiceDefinition::of_type(INBOX_SERVICE)
    }
}

/// `acli`, `pull` and `push`, plus the base recipe's `drush` entry.
pub fn acquia_tooling(ctx: &AppContext) -> Result<Tooling> {
    let keys = sort_keys(&[&ctx.app_keys, &ctx.host_keys]);
    let credentials = TaskCredentials {
        key: ctx.meta.key.clone(),
        secret: ctx.meta.secret.clone(),
        account: ctx.meta.label.clone(),
        app_uuid: ctx.settings.ah_application_uuid.clone(),
    };

    Ok(Tooling::from([
        (
            "acli".to_string(),
            ToolingDefinition::new(APPSERVER, "acli")
                .with_description("Run the Acquia acli command"),
        ),
        (
            "drush".to_string(),
            ToolingDefinition {
                service: Some(APPSERVER.to_string()),
                ..Default::default()
            },
        ),
        ("pull".to_string(), pull_task(&credentials, &keys)?),
        ("push".to_string(), push_task(&credentials, &keys)?),
    ]))
}

/// Apply the Acquia transforms to `options`.
///
/// The app's own `tooling` in the recipe config is replaced; top-level
/// tooling of the app is layered later by [`super::ResolvedRecipe::with_landofile`].
pub fn prepare(options: &mut RecipeOptions, ctx: &AppContext) -> Result<()> {
    if options.database.is_empty() {
        options.database = DEFAULT_DATABASE.to_string();
    }
    options.env_file = vec![".env".to_string()];
    options.webroot = "docroot".to_string();

    let settings = &ctx.settings;
    let login = ctx.meta.key.as_deref().zip(ctx.meta.secret.as_deref());
    let steps = provision_steps(&settings.acli_version, settings.run_scripts, login);
    tracing::debug!(acli = %settings.acli_version, steps = steps.len(), "Provisioning Acquia CLI");

    let conf_dest = options.conf_dest_path();
    let group = settings.ah_site_group.clone().unwrap_or_default();

    let appserver = options.appserver_mut();
    appserver.build.extend(steps);
    let overrides = appserver.overrides_mut();
    overrides.environment = acquia_environment(settings);
    if let Some(dir) = conf_dest {
        overrides
            .volumes
            .push(dir.join("acquia-settings.inc").mount(&settings_include(&group)));
    }

    if options.cache {
        options.services.insert("cache".to_string(), cache_service());
    }
    if options.inbox {
        options.services.insert("inbox".to_string(), inbox_service());
        options.proxy.insert(
            "inbox".to_string(),
            vec![format!("inbox.{}.{}", options.app, ctx.domain)],
        );
    }

    options.tooling = acquia_tooling(ctx)?;
    Ok(())
}
