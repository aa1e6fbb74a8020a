//! Saved key listing

use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use acquia_core::credentials::{app_keys, host_keys, sort_keys};
use acquia_meta::AcquiaKey;

use super::{home_dir, print_json};
use crate::error::Result;

/// A saved key without its secret
#[derive(Debug, Serialize)]
struct KeySummary<'a> {
    label: &'a str,
    key: &'a str,
    uuid: &'a str,
}

impl<'a> From<&'a AcquiaKey> for KeySummary<'a> {
    fn from(key: &'a AcquiaKey) -> Self {
        Self {
            label: &key.label,
            key: &key.key,
            uuid: &key.uuid,
        }
    }
}

/// Run the keys command
pub fn run_keys(home: Option<&Path>, app: Option<&str>, json: bool) -> Result<()> {
    let home = home_dir(home)?;
    let host = host_keys(&home)?;
    let app_saved = match app {
        Some(app) => app_keys(&home, app)?,
        None => Vec::new(),
    };
    let keys = sort_keys(&[&app_saved, &host]);

    if json {
        let summaries: Vec<KeySummary<'_>> = keys.iter().map(KeySummary::from).collect();
        return print_json(&summaries);
    }

    if keys.is_empty() {
        println!(
            "{} (run {} to add one)",
            "No saved Acquia keys".dimmed(),
            "acli auth:login".cyan()
        );
        return Ok(());
    }

    println!("{}", "Saved Acquia keys".bold());
    println!();
    for key in &keys {
        println!("  {:<24} {} ({})", key.label.green(), key.key, key.uuid.dimmed());
    }
    Ok(())
}
