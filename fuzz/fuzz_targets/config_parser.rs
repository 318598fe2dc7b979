//! Fuzz target for the migration configuration parser.
//!
//! Feeds arbitrary input, and arbitrary but well-formed JSON documents, to
//! the parser to find panics and broken invariants.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use megreat_config::parse_configuration;
use serde_json::{Map, Value, json};

/// A structured config for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzConfig {
    raw: String,
    sql_files_directories: Option<Vec<String>>,
    db_type: Option<String>,
    connection_string: Option<String>,
    log_output_directory: Option<String>,
}

impl FuzzConfig {
    fn to_json(&self) -> String {
        let mut root = Map::new();
        if let Some(dirs) = &self.sql_files_directories {
            root.insert("sql_files_directories".to_string(), json!(dirs));
        }

        let mut connection = Map::new();
        if let Some(ty) = &self.db_type {
            connection.insert("type".to_string(), json!(ty));
        }
        if let Some(conn) = &self.connection_string {
            connection.insert("connection_string".to_string(), json!(conn));
        }
        root.insert("db_connection".to_string(), Value::Object(connection));

        if let Some(dir) = &self.log_output_directory {
            root.insert("log_output_directory".to_string(), json!(dir));
        }

        Value::Object(root).to_string()
    }
}

fuzz_target!(|input: FuzzConfig| {
    // The parser should never panic, only return errors
    let _ = parse_configuration(&input.raw);

    if let Ok(config) = parse_configuration(&input.to_json()) {
        assert!(!config.sql_files_directories().is_empty());
        assert!(
            config
                .sql_files_directories()
                .iter()
                .all(|dir| !dir.trim().is_empty())
        );
        assert!(!config.db_connection().connection_string().trim().is_empty());
        assert_eq!(
            config.log_output_directory(),
            input.log_output_directory.as_deref()
        );
    }
});
