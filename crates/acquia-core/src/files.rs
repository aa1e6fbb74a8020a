//! Config template selection
//!
//! Decides which template file backs each config type (`php`, `vhosts`,
//! `database`, ...) and maps the selection to host paths for the services.

use crate::options::RecipeOptions;
use acquia_fs::NormalizedPath;
use std::collections::BTreeMap;

/// Vhost template used by nginx-backed appservers
pub const NGINX_VHOST: &str = "default.conf.tpl";

/// Config types mounted into the appserver
pub const APPSERVER_CONFIG_TYPES: &[&str] = &["php", "server", "vhosts"];

/// Config types mounted into the database
pub const DATABASE_CONFIG_TYPES: &[&str] = &["database"];

/// Split `family:version` and return the family plus the first two
/// characters of the version. Without a colon both halves come from the
/// whole string.
pub fn split_database(database: &str) -> (&str, &str) {
    let family = database.split(':').next().unwrap_or(database);
    let version = database.rsplit(':').next().unwrap_or(database);
    let prefix_end = version
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(version.len());
    (family, &version[..prefix_end])
}

/// The database config template for a database string, if the family has one.
pub fn database_template(database: &str) -> Option<&'static str> {
    let (family, version) = split_database(database);
    if !family.contains("mysql") {
        return None;
    }
    if version == "8." {
        Some("mysql8.cnf")
    } else {
        Some("mysql.cnf")
    }
}

/// Apply web server and database selection to a copy of `defaults`, then
/// drop every entry whose file is missing from `conf_dest`.
///
/// A missing `conf_dest` prunes everything.
pub fn select_config_defaults(
    defaults: &BTreeMap<String, String>,
    via: &str,
    database: &str,
    conf_dest: Option<&NormalizedPath>,
) -> BTreeMap<String, String> {
    let mut selected = defaults.clone();

    if via.starts_with("nginx") {
        selected.insert("vhosts".to_string(), NGINX_VHOST.to_string());
    }
    if let Some(template) = database_template(database) {
        selected.insert("database".to_string(), template.to_string());
    }

    selected.retain(|kind, file| {
        let exists = conf_dest.is_some_and(|dir| dir.join(file).exists());
        if !exists {
            tracing::debug!(kind = %kind, file = %file, "Pruning missing config template");
        }
        exists
    });

    selected
}

/// Final default file map: the pruned selection with the caller's entries
/// layered on top.
///
/// Caller entries are never pruned.
pub fn resolve_default_files(
    defaults: &BTreeMap<String, String>,
    caller: &BTreeMap<String, String>,
    via: &str,
    database: &str,
    conf_dest: Option<&NormalizedPath>,
) -> BTreeMap<String, String> {
    let mut resolved = select_config_defaults(defaults, via, database, conf_dest);
    resolved.extend(caller.iter().map(|(k, v)| (k.clone(), v.clone())));
    resolved
}

/// Host paths of the config files for the given types.
///
/// An explicit `config.<type>` wins verbatim; otherwise the default file is
/// resolved inside `conf_dest` when both are known.
pub fn service_config(options: &RecipeOptions, types: &[&str]) -> BTreeMap<String, String> {
    let conf_dest = options.conf_dest_path();
    let mut config = BTreeMap::new();

    for kind in types {
        if let Some(explicit) = options.config.get(*kind) {
            config.insert(kind.to_string(), explicit.clone());
        } else if let (Some(file), Some(dir)) = (options.default_files.get(*kind), &conf_dest) {
            config.insert(kind.to_string(), dir.join(file).as_str().to_string());
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mysql:8.0", "mysql", "8.")]
    #[case("mysql:5.7", "mysql", "5.")]
    #[case("mysql", "mysql", "my")]
    #[case("postgres:13", "postgres", "13")]
    #[case("mariadb:10.3", "mariadb", "10")]
    #[case("mysql:8", "mysql", "8")]
    fn test_split_database(#[case] input: &str, #[case] family: &str, #[case] prefix: &str) {
        assert_eq!(split_database(input), (family, prefix));
    }

    #[rstest]
    #[case("mysql:8.0", Some("mysql8.cnf"))]
    #[case("mysql:8.4", Some("mysql8.cnf"))]
    #[case("mysql:5.7", Some("mysql.cnf"))]
    #[case("mysql", Some("mysql.cnf"))]
    #[case("acquia-mysql:8.0", Some("mysql8.cnf"))]
    #[case("postgres:13", None)]
    #[case("mongo", None)]
    fn test_database_template(#[case] database: &str, #[case] expected: Option<&str>) {
        assert_eq!(database_template(database), expected);
    }

    #[test]
    fn test_no_conf_dest_prunes_everything() {
        let defaults = BTreeMap::from([("php".to_string(), "php.ini".to_string())]);
        let selected = select_config_defaults(&defaults, "nginx", "mysql:8.0", None);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_service_config_explicit_wins() {
        let options = RecipeOptions {
            conf_dest: Some("/conf".into()),
            config: BTreeMap::from([("php".to_string(), "config/php.ini".to_string())]),
            default_files: BTreeMap::from([
                ("php".to_string(), "php.ini".to_string()),
                ("vhosts".to_string(), "default.conf.tpl".to_string()),
            ]),
            ..Default::default()
        };

        let config = service_config(&options, APPSERVER_CONFIG_TYPES);

        assert_eq!(config["php"], "config/php.ini");
        assert_eq!(config["vhosts"], "/conf/default.conf.tpl");
        assert!(!config.contains_key("server"));
    }

    #[test]
    fn test_service_config_without_conf_dest() {
        let options = RecipeOptions {
            default_files: BTreeMap::from([("database".to_string(), "mysql.cnf".to_string())]),
            ..Default::default()
        };

        assert!(service_config(&options, DATABASE_CONFIG_TYPES).is_empty());
    }
}
