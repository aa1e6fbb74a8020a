//! Defaults registry
//!
//! Static fragments the recipe starts from. Recipe option defaults are
//! returned as JSON so they can be layered under user options with
//! [`crate::merge::merge_layers`] before being read into a typed struct.

use crate::schema::{ToolingDefinition, ToolingOption};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Drush installed when nothing else is requested
pub const DRUSH8: &str = "8.4.10";

/// Drush installed for the oldest supported PHP
pub const DRUSH7: &str = "7.4.0";

/// PHP version that still needs drush 7
pub const LEGACY_PHP: &str = "5.3";

/// Domain used for proxy hostnames when the host does not configure one
pub const DEFAULT_DOMAIN: &str = "lndo.site";

/// Option defaults of the base recipe
pub fn base_recipe() -> Value {
    json!({
        "build": [],
        "composer": {},
        "config": {},
        "database": "mysql",
        "default_files": {"php": "php.ini"},
        "php": "7.2",
        "tooling": {"drush": {"service": "appserver"}},
        "via": "apache",
        "webroot": ".",
        "xdebug": false,
        "proxy": {},
        "drush_uri": null
    })
}

/// Option defaults of the Acquia recipe, layered over [`base_recipe`]
pub fn acquia_recipe() -> Value {
    json!({
        "cache": true,
        "composer_version": "2",
        "default_files": {},
        "database": "mysql:5.7",
        "drush": DRUSH8,
        "inbox": true,
        "php": "8.3",
        "services": {"appserver": {
            "build": [],
            "overrides": {"volumes": [], "environment": {}}
        }},
        "proxy": {}
    })
}

fn host_option() -> ToolingOption {
    ToolingOption::described("The database service to use")
        .with_default("database")
        .with_alias("h")
}

/// Commands every recipe exposes regardless of database
pub fn tooling_defaults() -> BTreeMap<String, ToolingDefinition> {
    let mut tooling = BTreeMap::new();

    tooling.insert(
        "composer".to_string(),
        ToolingDefinition::new("appserver", "composer --ansi"),
    );
    tooling.insert(
        "db-import <file>".to_string(),
        ToolingDefinition::new(":host", "/helpers/sql-import.sh")
            .with_description("Imports a dump file into a database service")
            .with_user("root")
            .with_option("host", host_option())
            .with_option(
                "no-wipe",
                ToolingOption::described("Do not destroy the existing database before an import")
                    .boolean(),
            ),
    );
    tooling.insert(
        "db-export [file]".to_string(),
        ToolingDefinition::new(":host", "/helpers/sql-export.sh")
            .with_description("Exports database from a database service to a file")
            .with_user("root")
            .with_option("host", host_option())
            .with_option("stdout", ToolingOption::described("Dump database to stdout")),
    );
    tooling.insert("php".to_string(), ToolingDefinition::new("appserver", "php"));

    tooling
}

pub fn mysql_cli() -> ToolingDefinition {
    ToolingDefinition::new(":host", "mysql -uroot")
        .with_description("Drops into a MySQL shell on a database service")
        .with_option("host", host_option())
}

pub fn postgres_cli() -> ToolingDefinition {
    ToolingDefinition::new(":host", "psql -Upostgres")
        .with_description("Drops into a psql shell on a database service")
        .with_user("root")
        .with_option("host", host_option())
}

pub fn mongo_cli() -> ToolingDefinition {
    ToolingDefinition {
        service: Some("database".to_string()),
        description: Some("Drop into the mongo shell".to_string()),
        ..Default::default()
    }
}
