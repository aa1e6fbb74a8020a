//! The base pipeline shared by every Acquia recipe

use super::Files;
use crate::options::{AppContext, RecipeOptions};
use crate::{Result, drush, files, proxy, services, tooling};
use acquia_meta::{Warning, layer};

/// Database string used for template selection: the app's database service
/// type when it sets one, else the recipe's `database`, else `mysql`.
pub fn database_type<'a>(options: &'a RecipeOptions, ctx: &'a AppContext) -> &'a str {
    ctx.database_type
        .as_deref()
        .or(Some(options.database.as_str()).filter(|db| !db.is_empty()))
        .unwrap_or("mysql")
}

/// Run the base pipeline over `options`, returning the advisories it raised.
pub fn build(
    options: &mut RecipeOptions,
    ctx: &AppContext,
    registry_files: &Files,
    caller_files: &Files,
) -> Result<Vec<Warning>> {
    let mut warnings = Vec::new();
    warnings.extend(drush::apply(options));

    let legacy = services::legacy_environment(&options.via, &options.recipe);
    options
        .appserver_mut()
        .overrides_mut()
        .environment
        .extend(legacy);

    let database = database_type(options, ctx).to_string();
    options.default_files = files::resolve_default_files(
        registry_files,
        caller_files,
        &options.via,
        &database,
        options.conf_dest_path().as_ref(),
    );
    tracing::debug!(files = ?options.default_files, "Resolved default files");

    options.services = layer(
        "services",
        &services::computed_services(options),
        &options.services,
    )?;
    options.tooling = tooling::resolve_tooling(&options.database, &options.tooling)?;

    proxy::register(options, &ctx.domain);
    proxy::apply_drush_uri(options, ctx.proxy_last_ports);

    Ok(warnings)
}
