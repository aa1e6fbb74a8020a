//! Recipe and tooling resolution

use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

use acquia_core::recipe::{RecipeKind, resolve};
use acquia_core::tooling::resolve_tooling;
use acquia_core::{Landofile, ProxyPorts};
use acquia_fs::NormalizedPath;

use super::{home_dir, print_json};
use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

/// Host facts passed to `resolve`
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions<'a> {
    pub home: Option<&'a Path>,
    pub conf_dest: Option<&'a Path>,
    pub domain: &'a str,
    pub http_port: Option<u16>,
    pub https_port: Option<u16>,
    pub format: OutputFormat,
}

/// Run the resolve command
pub fn run_resolve(file: &Path, opts: &ResolveOptions<'_>) -> Result<()> {
    let landofile = Landofile::load(&NormalizedPath::new(file))?;
    let recipe = landofile.recipe.as_deref().unwrap_or_default();
    let kind = RecipeKind::from_name(recipe).ok_or_else(|| {
        CliError::user(format!(
            "Unsupported recipe '{recipe}'. Valid: acquia, acquia-base"
        ))
    })?;

    let mut ctx = landofile.context(home_dir(opts.home)?)?;
    ctx.domain = opts.domain.to_string();
    ctx.conf_dest = opts.conf_dest.map(NormalizedPath::new);
    if opts.http_port.is_some() || opts.https_port.is_some() {
        ctx.proxy_last_ports = Some(ProxyPorts {
            http: opts.http_port,
            https: opts.https_port,
        });
    }

    let (options, _) = landofile.recipe_options();
    let resolved = resolve(kind, options, &ctx)?.with_landofile(&landofile)?;

    for warning in &resolved.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    match opts.format {
        OutputFormat::Json => print_json(&resolved),
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&resolved)?);
            Ok(())
        }
    }
}

/// Run the tooling command
pub fn run_tooling(database: &str) -> Result<()> {
    let tooling = resolve_tooling(database, &BTreeMap::new())?;
    print_json(&tooling)
}
