//! Drush installation
//!
//! Drush 8 ships as a phar and is downloaded during the appserver build;
//! every other version is installed globally through composer. Versions from
//! 10 on prefer a site-local install, which is surfaced as a warning.

use crate::options::{DrushRequest, RecipeOptions};
use acquia_meta::Warning;
use acquia_meta::defaults::{DRUSH7, DRUSH8, LEGACY_PHP};
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

pub const DRUSH_PACKAGE: &str = "drush/drush";
pub const DRUSH_INSTALL_DOCS: &str = "https://www.drush.org/install/";

static VERSION_RUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").ok());

/// What the appserver build needs to install drush
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrushPlan {
    /// Version constraint for a global composer install
    pub composer: Option<String>,
    /// Build step downloading the phar
    pub phar_step: Option<String>,
    pub warning: Option<Warning>,
}

/// Default drush for a PHP version.
pub fn default_version(php: &str) -> &'static str {
    if php == LEGACY_PHP { DRUSH7 } else { DRUSH8 }
}

/// Read the first `major[.minor[.patch]]` run of digits as a version.
pub fn coerce(version: &str) -> Option<Version> {
    let re = VERSION_RUN.as_ref()?;
    let caps = re.captures(version)?;
    let part = |idx: usize| -> Option<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}

/// Shell command that downloads a phar to `src`, installs it at `dest` and
/// runs `check`. Steps are joined with `&&`.
pub fn phar_install(url: &str, src: &str, dest: &str, check: &[&str]) -> String {
    let check = if check.is_empty() {
        "true".to_string()
    } else {
        check.join(" ")
    };
    [
        format!("curl {url} -LsS -o {src}"),
        format!("chmod +x {src}"),
        format!("mv {src} {dest}"),
        check,
    ]
    .join(" && ")
}

pub fn phar_url(version: &str) -> String {
    format!("https://github.com/drush-ops/drush/releases/download/{version}/drush.phar")
}

/// Build step installing the drush phar of `version`.
pub fn phar_command(version: &str) -> String {
    phar_install(
        &phar_url(version),
        "/tmp/drush.phar",
        "/usr/local/bin/drush",
        &["drush", "--version"],
    )
}

pub fn site_local_warning(version: &str) -> Warning {
    Warning {
        title: "May need site-local drush".to_string(),
        detail: vec![
            format!("Lando has detected you are trying to globally install drush {version}"),
            "This version of drush prefers a site-local installation".to_string(),
            "We recommend you install drush that way, see:".to_string(),
        ],
        url: Some(DRUSH_INSTALL_DOCS.to_string()),
    }
}

/// Plan the install for a requested version.
pub fn plan(version: &str) -> DrushPlan {
    let mut plan = DrushPlan::default();

    match Version::parse(version) {
        Ok(parsed) if parsed.major == 8 => plan.phar_step = Some(phar_command(version)),
        _ => plan.composer = Some(version.to_string()),
    }

    if coerce(version).is_some_and(|v| v >= Version::new(10, 0, 0)) {
        plan.warning = Some(site_local_warning(version));
    }

    plan
}

/// Apply the drush plan to the options.
///
/// Returns the advisory warning, if any. `drush: false` leaves the options
/// untouched.
pub fn apply(options: &mut RecipeOptions) -> Option<Warning> {
    let version = match &options.drush {
        Some(DrushRequest::Toggle(false)) => return None,
        Some(request) => request
            .version()
            .unwrap_or_else(|| default_version(&options.php).to_string()),
        None => default_version(&options.php).to_string(),
    };
    options.drush = Some(DrushRequest::Version(version.clone()));

    let plan = plan(&version);
    tracing::debug!(version = %version, phar = plan.phar_step.is_some(), "Resolved drush install");

    options.composer.remove(DRUSH_PACKAGE);
    if let Some(constraint) = plan.composer {
        options.composer.insert(DRUSH_PACKAGE.to_string(), constraint);
    }
    if let Some(step) = plan.phar_step {
        options.build.insert(0, step);
    }

    plan.warning
}
