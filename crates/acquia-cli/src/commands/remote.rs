//! Commands that talk to the Acquia Cloud API directly

use colored::Colorize;
use std::path::Path;

use acquia_cloud::AcquiaApi;
use acquia_fs::NormalizedPath;

use super::print_json;
use crate::cli::{CredentialArgs, EndpointArgs};
use crate::error::{CliError, Result};

/// An authenticated client for the given credentials.
pub async fn connect(credentials: &CredentialArgs, endpoints: &EndpointArgs) -> Result<AcquiaApi> {
    let (Some(key), Some(secret)) = (&credentials.key, &credentials.secret) else {
        return Err(CliError::user(
            "Acquia API credentials required; pass --key and --secret",
        ));
    };

    let mut api = AcquiaApi::with_endpoints(&endpoints.auth_url, &endpoints.api_url);
    api.auth(key, secret, true, true).await?;
    Ok(api)
}

/// Run the apps command
pub async fn run_apps(
    credentials: &CredentialArgs,
    endpoints: &EndpointArgs,
    json: bool,
) -> Result<()> {
    let api = connect(credentials, endpoints).await?;
    let apps = api.get_applications().await?.unwrap_or_default();

    if json {
        return print_json(&apps);
    }
    if apps.is_empty() {
        println!("{}", "No applications".dimmed());
        return Ok(());
    }

    println!("{}", "Applications".bold());
    println!();
    for app in &apps {
        println!("  {:<40} {}", app.name.green(), app.uuid.dimmed());
    }
    Ok(())
}

/// Run the post-key command
pub async fn run_post_key(
    path: &Path,
    label: &str,
    credentials: &CredentialArgs,
    endpoints: &EndpointArgs,
) -> Result<()> {
    let api = connect(credentials, endpoints).await?;

    match api.post_key(&NormalizedPath::new(path), label).await? {
        Some(_) => println!("{} Uploaded {}", "+".green(), path.display()),
        None => println!("{} Key already registered", "=".dimmed()),
    }
    Ok(())
}
