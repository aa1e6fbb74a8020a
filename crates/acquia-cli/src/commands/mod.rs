//! Command implementations for acquia-cli

pub mod acli;
pub mod keys;
pub mod remote;
pub mod resolve;
pub mod tasks;

pub use acli::run_acli_uuid;
pub use keys::run_keys;
pub use remote::{run_apps, run_post_key};
pub use resolve::{run_resolve, run_tooling};
pub use tasks::run_task;

use crate::error::{CliError, Result};
use acquia_fs::NormalizedPath;
use serde::Serialize;
use std::path::Path;

/// The home directory: `--home` when given, else the user's home.
pub fn home_dir(home: Option<&Path>) -> Result<NormalizedPath> {
    home.map(Path::to_path_buf)
        .or_else(dirs::home_dir)
        .map(NormalizedPath::new)
        .ok_or_else(|| CliError::user("Could not determine the home directory; pass --home"))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
