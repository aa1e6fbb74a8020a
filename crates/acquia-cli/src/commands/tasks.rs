//! The pull and push prompt flows

use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

use acquia_cloud::AcquiaApi;
use acquia_core::acli::{ACLI_PROJECT_FILE, get_acli_uuid};
use acquia_core::credentials::sort_keys;
use acquia_core::flow::FlowContext;
use acquia_core::{
    Answers, Credentials, Direction, EnvironmentResolver, Landofile, TaskCredentials,
    collect_answers, default_flow, pull_task, push_task,
};
use acquia_fs::NormalizedPath;

use super::{home_dir, print_json};
use crate::cli::TaskArgs;
use crate::error::{CliError, Result};
use crate::interactive::TerminalPrompter;

/// Application UUID from the recipe config, else the project file beside the
/// landofile.
fn application_uuid(configured: Option<&str>, file: &Path) -> Result<String> {
    if let Some(uuid) = configured {
        return Ok(uuid.to_string());
    }

    let dir = file.parent().unwrap_or_else(|| Path::new("."));
    let project = NormalizedPath::new(dir.join(ACLI_PROJECT_FILE));
    get_acli_uuid(&project)?.ok_or_else(|| {
        CliError::user(
            "No Acquia application UUID; set ah_application_uuid or run `lando-acquia acli-uuid --write <uuid>`",
        )
    })
}

fn preset(args: &TaskArgs) -> Answers {
    [
        ("key", &args.credentials.key),
        ("secret", &args.credentials.secret),
        ("code", &args.code),
        ("database", &args.database),
        ("files", &args.files),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    .collect()
}

/// Run the pull or push command
pub async fn run_task(direction: Direction, home: Option<&Path>, args: &TaskArgs) -> Result<()> {
    let landofile = Landofile::load(&NormalizedPath::new(&args.file))?;
    let ctx = landofile.context(home_dir(home)?)?;
    let app_uuid = application_uuid(ctx.settings.ah_application_uuid.as_deref(), &args.file)?;

    let credentials = TaskCredentials {
        key: args.credentials.key.clone().or_else(|| ctx.meta.key.clone()),
        secret: args.credentials.secret.clone().or_else(|| ctx.meta.secret.clone()),
        account: ctx.meta.label.clone(),
        app_uuid: Some(app_uuid.clone()),
    };
    let fallback = Credentials {
        key: credentials.key.clone(),
        secret: credentials.secret.clone(),
    };
    let keys = sort_keys(&[&ctx.app_keys, &ctx.host_keys]);

    let task = match direction {
        Direction::Pull => pull_task(&credentials, &keys)?,
        Direction::Push => push_task(&credentials, &keys)?,
    };
    tracing::debug!(app = %ctx.name, uuid = %app_uuid, keys = keys.len(), "Starting task flow");

    let api = AcquiaApi::with_endpoints(&args.endpoints.auth_url, &args.endpoints.api_url);
    let mut resolver = EnvironmentResolver::new(api, direction);
    let flow = FlowContext {
        resolver: &mut resolver,
        fallback: &fallback,
        app_uuid: &app_uuid,
        has_saved_keys: !keys.is_empty(),
    };

    let preset = preset(args);
    let answers = if args.no_interaction {
        default_flow(&task, &preset, flow).await?
    } else {
        collect_answers(&task, &preset, flow, &mut TerminalPrompter).await?
    };

    let shown: BTreeMap<&str, &str> = answers
        .iter()
        .map(|(name, value)| if name == "secret" { (name, "***") } else { (name, value) })
        .collect();

    if args.json {
        return print_json(&shown);
    }

    let verb = match direction {
        Direction::Pull => "Pulling",
        Direction::Push => "Pushing",
    };
    println!("{} {}", verb.bold(), ctx.name.cyan());
    for (name, value) in &shown {
        println!("  {:<10} {}", name, value.green());
    }
    Ok(())
}
