//! Tooling resolution
//!
//! Baseline commands plus the shell for the configured database family, with
//! the caller's tooling layered on top.

use crate::Result;
use acquia_meta::{ToolingDefinition, defaults, layer};
use std::collections::BTreeMap;

pub type Tooling = BTreeMap<String, ToolingDefinition>;

/// Database shell for a database string, ignoring any version suffix.
pub fn database_tooling(database: &str) -> Tooling {
    let family = database.split(':').next().unwrap_or(database);
    match family {
        "mysql" => Tooling::from([("mysql".to_string(), defaults::mysql_cli())]),
        "postgres" => Tooling::from([("psql".to_string(), defaults::postgres_cli())]),
        "mongo" => Tooling::from([("mongo".to_string(), defaults::mongo_cli())]),
        _ => Tooling::new(),
    }
}

/// Baseline ⊕ database shell ⊕ caller tooling.
pub fn resolve_tooling(database: &str, caller: &Tooling) -> Result<Tooling> {
    let mut computed = defaults::tooling_defaults();
    computed.extend(database_tooling(database));
    Ok(layer("tooling", &computed, caller)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mysql:8.0", Some("mysql"))]
    #[case("mysql", Some("mysql"))]
    #[case("postgres:13", Some("psql"))]
    #[case("mongo:4", Some("mongo"))]
    #[case("mariadb:10.6", None)]
    #[case("", None)]
    fn test_database_tooling(#[case] database: &str, #[case] expected: Option<&str>) {
        let tooling = database_tooling(database);
        match expected {
            Some(name) => {
                assert_eq!(tooling.len(), 1);
                assert!(tooling.contains_key(name));
            }
            None => assert!(tooling.is_empty()),
        }
    }

    #[test]
    fn test_resolve_keeps_baseline() {
        let tooling = resolve_tooling("postgres:13", &Tooling::new()).unwrap();

        for name in ["composer", "db-import <file>", "db-export [file]", "php", "psql"] {
            assert!(tooling.contains_key(name), "missing {name}");
        }
        assert_eq!(
            tooling["psql"].cmd.as_deref(),
            Some("psql -Upostgres")
        );
    }

    #[test]
    fn test_caller_tooling_wins_and_repeats() {
        let caller = Tooling::from([(
            "php".to_string(),
            ToolingDefinition::new("appserver", "php -d memory_limit=-1"),
        )]);

        let first = resolve_tooling("mysql:8.0", &caller).unwrap();
        let second = resolve_tooling("mysql:8.0", &caller).unwrap();

        assert_eq!(first, second);
        assert_eq!(first["php"].cmd.as_deref(), Some("php -d memory_limit=-1"));
        assert!(first.contains_key("mysql"));
    }
}
