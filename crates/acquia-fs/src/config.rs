//! Format-agnostic configuration loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Format-agnostic configuration loader.
///
/// Detects the format from the file extension. Files without an extension
/// (for example `cloud_api.conf`, which is JSON) are loaded with an explicit
/// format via [`ConfigStore::load_as`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" | "conf" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    fn detect(path: &NormalizedPath) -> Result<Format> {
        let extension = path.extension().unwrap_or("");
        Format::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    /// Load configuration from a file, detecting the format from its extension.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        self.load_as(path, Self::detect(path)?)
    }

    /// Load configuration, returning `None` when the file does not exist.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        let format = Self::detect(path)?;
        match io::read_text_optional(path)? {
            Some(content) => parse(path, &content, format).map(Some),
            None => Ok(None),
        }
    }

    /// Load configuration from a file in an explicit format.
    pub fn load_as<T: DeserializeOwned>(&self, path: &NormalizedPath, format: Format) -> Result<T> {
        let content = io::read_text(path)?;
        parse(path, &content, format)
    }
}

fn parse<T: DeserializeOwned>(path: &NormalizedPath, content: &str, format: Format) -> Result<T> {
    let parse_err = |message: String| Error::ConfigParse {
        path: path.to_native(),
        format: format.label().into(),
        message,
    };

    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string())),
    }
}
