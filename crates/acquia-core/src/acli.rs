//! Acquia CLI provisioning and its project file

use crate::Result;
use acquia_fs::{ConfigStore, NormalizedPath, io};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Project file the Acquia CLI reads the application from
pub const ACLI_PROJECT_FILE: &str = ".acquia-cli.yml";

const ACLI_REPO: &str = "https://github.com/acquia/cli";
const ACLI_BIN: &str = "/usr/local/bin/acli";

static RELEASE_VERSION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").ok());

#[derive(Debug, Default, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    cloud_app_uuid: Option<String>,
}

/// The application UUID recorded in a project file.
pub fn get_acli_uuid(file: &NormalizedPath) -> Result<Option<String>> {
    let project: Option<ProjectFile> = ConfigStore::new().load_optional(file)?;
    Ok(project.and_then(|p| p.cloud_app_uuid))
}

/// Record the application UUID unless a project file already exists.
///
/// Returns whether the file was written.
pub fn write_acli_uuid(uuid: &str, file: &NormalizedPath) -> Result<bool> {
    let written = io::write_new(file, format!("cloud_app_uuid: {uuid}\n").as_bytes())?;
    if written {
        tracing::info!(path = %file, "Wrote Acquia CLI project file");
    } else {
        tracing::debug!(path = %file, "Acquia CLI project file exists, leaving it");
    }
    Ok(written)
}

/// How the Acquia CLI gets into the appserver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcliInstall {
    /// Latest released phar
    Latest,
    /// Phar of a tagged release
    Release(String),
    /// Built from a branch of the source repository
    Source(String),
}

impl AcliInstall {
    pub fn from_version(version: &str) -> Self {
        if version == "latest" {
            return Self::Latest;
        }
        let is_release = RELEASE_VERSION
            .as_ref()
            .is_some_and(|re| re.is_match(version));
        if is_release {
            Self::Release(version.to_string())
        } else {
            Self::Source(version.to_string())
        }
    }

    /// Download URL of the phar, `None` for source builds.
    pub fn download_url(&self) -> Option<String> {
        match self {
            Self::Latest => Some(format!("{ACLI_REPO}/releases/latest/download/acli.phar")),
            Self::Release(v) => Some(format!("{ACLI_REPO}/releases/download/{v}/acli.phar")),
            Self::Source(_) => None,
        }
    }

    pub fn build_steps(&self) -> Vec<String> {
        match (self, self.download_url()) {
            (Self::Source(branch), _) => vec![
                "rm -rf /usr/local/cli".to_string(),
                format!(
                    "cd /usr/local/ && git clone {ACLI_REPO}.git -b \"{branch}\" && cd cli && composer install"
                ),
                format!("ln -sf /usr/local/cli/bin/acli {ACLI_BIN}"),
            ],
            (_, Some(url)) => vec![
                format!("curl -OL {url}"),
                "chmod +x acli.phar".to_string(),
                format!("mv acli.phar {ACLI_BIN}"),
            ],
            (_, None) => Vec::new(),
        }
    }
}

/// All appserver build steps for the Acquia CLI: install, config symlink,
/// project scripts and login.
pub fn provision_steps(
    version: &str,
    run_scripts: bool,
    credentials: Option<(&str, &str)>,
) -> Vec<String> {
    let mut steps = AcliInstall::from_version(version).build_steps();
    steps.push("/helpers/acquia-config-symlink.sh".to_string());
    if run_scripts {
        steps.push(format!("cd /app && {ACLI_BIN} pull:run-scripts -n"));
    }
    if let Some((key, secret)) = credentials {
        steps.push(format!("{ACLI_BIN} auth:login -k \"{key}\" -s \"{secret}\" -n"));
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("latest", AcliInstall::Latest)]
    #[case("2.30.1", AcliInstall::Release("2.30.1".into()))]
    #[case("main", AcliInstall::Source("main".into()))]
    #[case("2.30", AcliInstall::Source("2.30".into()))]
    #[case("v2.30.1", AcliInstall::Source("v2.30.1".into()))]
    fn test_from_version(#[case] version: &str, #[case] expected: AcliInstall) {
        assert_eq!(AcliInstall::from_version(version), expected);
    }

    #[test]
    fn test_release_steps() {
        assert_eq!(
            AcliInstall::Release("2.30.1".into()).build_steps(),
            vec![
                "curl -OL https://github.com/acquia/cli/releases/download/2.30.1/acli.phar",
                "chmod +x acli.phar",
                "mv acli.phar /usr/local/bin/acli",
            ]
        );
    }

    #[test]
    fn test_source_steps() {
        let steps = AcliInstall::Source("feature".into()).build_steps();
        assert_eq!(steps[0], "rm -rf /usr/local/cli");
        assert_eq!(
            steps[1],
            "cd /usr/local/ && git clone https://github.com/acquia/cli.git -b \"feature\" && cd cli && composer install"
        );
        assert_eq!(steps[2], "ln -sf /usr/local/cli/bin/acli /usr/local/bin/acli");
    }

    #[test]
    fn test_provision_steps() {
        let steps = provision_steps("latest", false, Some(("k", "s")));
        assert_eq!(
            steps,
            vec![
                "curl -OL https://github.com/acquia/cli/releases/latest/download/acli.phar",
                "chmod +x acli.phar",
                "mv acli.phar /usr/local/bin/acli",
                "/helpers/acquia-config-symlink.sh",
                "/usr/local/bin/acli auth:login -k \"k\" -s \"s\" -n",
            ]
        );

        let steps = provision_steps("latest", true, None);
        assert_eq!(
            steps.last().map(String::as_str),
            Some("cd /app && /usr/local/bin/acli pull:run-scripts -n")
        );
    }
}
