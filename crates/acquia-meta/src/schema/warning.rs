use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory message surfaced to the user. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub title: String,
    #[serde(default)]
    pub detail: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.detail {
            write!(f, "\n  {line}")?;
        }
        if let Some(url) = &self.url {
            write!(f, "\n  {url}")?;
        }
        Ok(())
    }
}
