//! Configuration parser for migration configuration documents.
//!
//! The document is decoded into a [`serde_json::Value`] first and then checked
//! field by field. Checks run in a fixed order and stop at the first failure,
//! so a document with several problems always reports the same error.

use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{ConnectionConfiguration, MigrationConfiguration, SqlType};
use crate::error::{ConfigError, ConfigResult};

const SQL_FILES_DIRECTORIES: &str = "sql_files_directories";
const DB_CONNECTION: &str = "db_connection";
const DB_TYPE: &str = "type";
const CONNECTION_STRING: &str = "connection_string";
const LOG_OUTPUT_DIRECTORY: &str = "log_output_directory";

/// Parse and validate a configuration document.
///
/// A leading UTF-8 byte order mark is skipped. This performs no I/O and holds
/// no state, so it can be called from any thread.
pub fn parse_configuration(input: &str) -> ConfigResult<MigrationConfiguration> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let document: Value =
        serde_json::from_str(input).map_err(|e| ConfigError::syntax(input, &e))?;
    let root = match document {
        Value::Object(root) => root,
        _ => return Err(ConfigError::not_an_object(input)),
    };

    let sql_files_directories = sql_files_directories(&root)?;
    let db_connection = db_connection(&root)?;
    let log_output_directory = log_output_directory(&root)?;

    Ok(MigrationConfiguration::new(
        sql_files_directories,
        db_connection,
        log_output_directory,
    ))
}

/// Read a configuration file and parse it.
pub fn parse_configuration_file(path: impl AsRef<Path>) -> ConfigResult<MigrationConfiguration> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Read configuration file");

    parse_configuration(&content)
}

/// Look up a key, treating an explicit `null` like a missing key.
fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

fn sql_files_directories(root: &Map<String, Value>) -> ConfigResult<Vec<String>> {
    let value = field(root, SQL_FILES_DIRECTORIES).ok_or(ConfigError::SqlFilesDirectoriesMissing)?;

    match value {
        Value::Array(items) if items.is_empty() => Err(ConfigError::SqlFilesDirectoriesEmpty),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                non_blank(item)
                    .map(str::to_string)
                    .ok_or(ConfigError::SqlFilesDirectoriesInvalid)
            })
            .collect(),
        _ => Err(ConfigError::SqlFilesDirectoriesInvalid),
    }
}

fn db_connection(root: &Map<String, Value>) -> ConfigResult<ConnectionConfiguration> {
    let connection = field(root, DB_CONNECTION)
        .and_then(Value::as_object)
        .ok_or(ConfigError::DbConnectionMissing)?;

    let connection_string = field(connection, CONNECTION_STRING)
        .and_then(non_blank)
        .ok_or(ConfigError::ConnectionStringInvalid)?;

    let sql_type = field(connection, DB_TYPE)
        .and_then(Value::as_str)
        .and_then(SqlType::from_tag)
        .ok_or(ConfigError::DbTypeInvalid)?;

    Ok(ConnectionConfiguration::new(sql_type, connection_string))
}

fn log_output_directory(root: &Map<String, Value>) -> ConfigResult<Option<String>> {
    match field(root, LOG_OUTPUT_DIRECTORY) {
        None => Ok(None),
        Some(Value::String(dir)) => Ok(Some(dir.clone())),
        Some(_) => Err(ConfigError::LogOutputDirectoryInvalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONNECTION: &str = "Server=HOST_NAME;Database=DB_NAME;Uid=USER_ID;Pwd=PASSWORD";

    fn error_message(input: &str) -> String {
        parse_configuration(input).unwrap_err().to_string()
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"
            {
                "sql_files_directories": [
                    "/your/directory/contains/sql",
                    "../another/directory/contains/sql"
                ],
                "db_connection": {
                    "type": "mysql",
                    "connection_string": "Server=HOST_NAME;Database=DB_NAME;Uid=USER_ID;Pwd=PASSWORD"
                },
                "log_output_directory": "../directory/output"
            }
        "#;

        let config = parse_configuration(json).unwrap();
        assert_eq!(
            config.sql_files_directories(),
            &[
                "/your/directory/contains/sql".to_string(),
                "../another/directory/contains/sql".to_string()
            ]
        );
        assert_eq!(config.db_connection().sql_type(), SqlType::MySql);
        assert_eq!(config.db_connection().connection_string(), CONNECTION);
        assert_eq!(config.log_output_directory(), Some("../directory/output"));
    }

    #[test]
    fn test_parse_without_log_output() {
        let json = r#"{
            "sql_files_directories": ["/a", "/b"],
            "db_connection": {"type": "mysql", "connection_string": "Server=H;Database=D;Uid=U;Pwd=P"}
        }"#;

        let config = parse_configuration(json).unwrap();
        assert_eq!(config.sql_files_directories(), &["/a".to_string(), "/b".to_string()]);
        assert_eq!(config.db_connection().connection_string(), "Server=H;Database=D;Uid=U;Pwd=P");
        assert_eq!(config.log_output_directory(), None);
    }

    #[test]
    fn test_null_log_output_is_unset() {
        let json = r#"{
            "sql_files_directories": ["/a"],
            "db_connection": {"type": "mysql", "connection_string": "x"},
            "log_output_directory": null
        }"#;

        assert_eq!(parse_configuration(json).unwrap().log_output_directory(), None);
    }

    #[test]
    fn test_log_output_kept_verbatim() {
        let json = r#"{
            "sql_files_directories": ["/a"],
            "db_connection": {"type": "mysql", "connection_string": "x"},
            "log_output_directory": "  ./logs "
        }"#;

        assert_eq!(parse_configuration(json).unwrap().log_output_directory(), Some("  ./logs "));
    }

    #[test]
    fn test_invalid_document() {
        assert_eq!(error_message("invalid configuration"), "Invalid configuration file.");
        assert_eq!(error_message(""), "Invalid configuration file.");
        assert_eq!(error_message("[1, 2]"), "Invalid configuration file.");
        assert_eq!(error_message("\"text\""), "Invalid configuration file.");
        assert_eq!(error_message("{\"sql_files_directories\": [\"/a\"],"), "Invalid configuration file.");
    }

    #[test]
    fn test_missing_sql_files_directories() {
        let json = r#"{
            "db_connection": {"type": "mysql", "connection_string": "x"},
            "log_output": "../directory/output"
        }"#;
        assert_eq!(error_message(json), "sql_files_directories configuration was not found.");

        let json = r#"{"sql_files_directories": null, "db_connection": {}}"#;
        assert_eq!(error_message(json), "sql_files_directories configuration was not found.");
    }

    #[test]
    fn test_empty_sql_files_directories() {
        let json = r#"{
            "sql_files_directories": [],
            "db_connection": {"type": "mysql", "connection_string": "x"}
        }"#;
        assert_eq!(error_message(json), "sql_files_directories configuration was empty.");
    }

    #[test]
    fn test_invalid_sql_files_directories() {
        for value in [r#"["/a", ""]"#, r#"["   "]"#, r#"["/a", 7]"#, r#""/a""#, r#"{"a": "/a"}"#] {
            let json = format!(
                r#"{{"sql_files_directories": {value}, "db_connection": {{"type": "mysql", "connection_string": "x"}}}}"#
            );
            assert_eq!(error_message(&json), "sql_files_directories has invalid value.", "{value}");
        }
    }

    #[test]
    fn test_missing_db_connection() {
        let json = r#"{"sql_files_directories": ["/a"], "log_output": "../directory/output"}"#;
        assert_eq!(error_message(json), "db_connection configuration was not found.");

        let json = r#"{"sql_files_directories": ["/a"], "db_connection": "mysql://localhost"}"#;
        assert_eq!(error_message(json), "db_connection configuration was not found.");
    }

    #[test]
    fn test_invalid_connection_string() {
        for connection in [
            r#"{"type": "mysql"}"#,
            r#"{"type": "mysql", "connection_string": ""}"#,
            r#"{"type": "mysql", "connection_string": "  "}"#,
            r#"{"type": "mysql", "connection_string": 42}"#,
        ] {
            let json = format!(r#"{{"sql_files_directories": ["/a"], "db_connection": {connection}}}"#);
            assert_eq!(
                error_message(&json),
                "db_connection.connection_string configuration was not found or has invalid value.",
                "{connection}"
            );
        }
    }

    #[test]
    fn test_invalid_db_type() {
        for connection in [
            r#"{"connection_string": "x"}"#,
            r#"{"type": "oracle", "connection_string": "x"}"#,
            r#"{"type": 1, "connection_string": "x"}"#,
        ] {
            let json = format!(r#"{{"sql_files_directories": ["/a"], "db_connection": {connection}}}"#);
            assert_eq!(
                error_message(&json),
                "db_connection.type configuration was not found or has invalid value.",
                "{connection}"
            );
        }
    }

    #[test]
    fn test_db_type_ignores_case() {
        let json = r#"{
            "sql_files_directories": ["/a"],
            "db_connection": {"type": "MySQL", "connection_string": "x"}
        }"#;
        assert_eq!(parse_configuration(json).unwrap().db_connection().sql_type(), SqlType::MySql);
    }

    #[test]
    fn test_invalid_log_output_directory() {
        let json = r#"{
            "sql_files_directories": ["/a"],
            "db_connection": {"type": "mysql", "connection_string": "x"},
            "log_output_directory": ["./logs"]
        }"#;
        assert_eq!(error_message(json), "log_output_directory has invalid value.");
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Empty directories beat a missing connection.
        assert_eq!(
            error_message(r#"{"sql_files_directories": []}"#),
            "sql_files_directories configuration was empty."
        );
        // A missing connection string beats an unknown type.
        assert_eq!(
            error_message(r#"{"sql_files_directories": ["/a"], "db_connection": {"type": "nope"}}"#),
            "db_connection.connection_string configuration was not found or has invalid value."
        );
        // Bad directories beat a bad log directory.
        assert_eq!(
            error_message(r#"{"sql_files_directories": [""], "log_output_directory": 3}"#),
            "sql_files_directories has invalid value."
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let json = r#"{
            "sql_files_directories": ["/b", "/a", "/b"],
            "db_connection": {"type": "mysql", "connection_string": "x"},
            "log_output_directory": "./logs"
        }"#;

        let first = parse_configuration(json).unwrap();
        let second = parse_configuration(json).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.sql_files_directories(), &["/b".to_string(), "/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let json = r#"{
            "sql_files_directories": ["/a", "/b"],
            "db_connection": {"type": "mysql", "connection_string": "Server=H;Pwd=P"},
            "log_output_directory": "./logs"
        }"#;

        let config = parse_configuration(json).unwrap();
        let reparsed = parse_configuration(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let json = "\u{feff}{\"sql_files_directories\": [\"/a\"], \"db_connection\": {\"type\": \"mysql\", \"connection_string\": \"x\"}}";
        let config = parse_configuration(json).unwrap();
        assert_eq!(config.sql_files_directories(), &["/a".to_string()]);

        // Only a leading mark is accepted.
        assert_eq!(error_message("{}\u{feff}"), "Invalid configuration file.");
    }

    #[test]
    fn test_parse_configuration_file_with_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("megreat.json");
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(
            br#"{"sql_files_directories": ["/a"], "db_connection": {"type": "mysql", "connection_string": "x"}}"#,
        );
        std::fs::write(&path, content).unwrap();

        let config = parse_configuration_file(&path).unwrap();
        assert_eq!(config.db_connection().sql_type(), SqlType::MySql);
    }

    #[test]
    fn test_parse_configuration_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("megreat.json");
        std::fs::write(
            &path,
            r#"{"sql_files_directories": ["/a"], "db_connection": {"type": "mysql", "connection_string": "x"}}"#,
        )
        .unwrap();

        let config = parse_configuration_file(&path).unwrap();
        assert_eq!(config.sql_files_directories(), &["/a".to_string()]);

        let err = parse_configuration_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
