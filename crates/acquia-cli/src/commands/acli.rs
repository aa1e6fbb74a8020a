//! `.acquia-cli.yml` handling

use colored::Colorize;
use std::path::Path;

use acquia_core::acli::{get_acli_uuid, write_acli_uuid};
use acquia_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the acli-uuid command
pub fn run_acli_uuid(file: &Path, write: Option<&str>) -> Result<()> {
    let file = NormalizedPath::new(file);

    if let Some(uuid) = write {
        if write_acli_uuid(uuid, &file)? {
            println!("{} Recorded {} in {}", "+".green(), uuid.cyan(), file);
        } else {
            println!("{} {} already exists, left untouched", "=".dimmed(), file);
        }
        return Ok(());
    }

    match get_acli_uuid(&file)? {
        Some(uuid) => {
            println!("{uuid}");
            Ok(())
        }
        None => Err(CliError::user(format!("No cloud_app_uuid in {file}"))),
    }
}
