//! Text reads and create-if-absent writes

use crate::{Error, NormalizedPath, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

/// Write content only when the file does not exist yet.
///
/// Returns `true` when the file was created and `false` when something was
/// already there. Existing content is never touched.
pub fn write_new(path: &NormalizedPath, content: &[u8]) -> Result<bool> {
    let native_path = path.to_native();
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&native_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path, "File already exists, not writing");
            return Ok(false);
        }
        Err(e) => return Err(Error::io(&native_path, e)),
    };

    file.write_all(content)
        .map_err(|e| Error::io(&native_path, e))?;
    Ok(true)
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating a missing file as `None`.
pub fn read_text_optional(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}
