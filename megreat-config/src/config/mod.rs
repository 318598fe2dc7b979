//! Validated migration configuration types.

use serde::Serialize;
use std::fmt;

/// Placeholder written over secret connection string values.
pub const REDACTED: &str = "****";

/// Connection string keys whose values are secrets.
const SECRET_KEYS: &[&str] = &["pwd", "password"];

/// Wire tags for every supported database type.
const SQL_TYPE_TAGS: &[(&str, SqlType)] = &[("mysql", SqlType::MySql)];

/// Validated configuration for a migration run.
///
/// Values of this type only come out of [`crate::parse_configuration`], so
/// every required field is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationConfiguration {
    sql_files_directories: Vec<String>,
    db_connection: ConnectionConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_output_directory: Option<String>,
}

impl MigrationConfiguration {
    pub(crate) fn new(
        sql_files_directories: Vec<String>,
        db_connection: ConnectionConfiguration,
        log_output_directory: Option<String>,
    ) -> Self {
        Self {
            sql_files_directories,
            db_connection,
            log_output_directory,
        }
    }

    /// Directories holding SQL migration files, in the order they were given.
    pub fn sql_files_directories(&self) -> &[String] {
        &self.sql_files_directories
    }

    /// Target database connection.
    pub fn db_connection(&self) -> &ConnectionConfiguration {
        &self.db_connection
    }

    /// Directory for log output exactly as written in the document.
    pub fn log_output_directory(&self) -> Option<&str> {
        self.log_output_directory.as_deref()
    }

    /// Directory log output should go to.
    ///
    /// A blank value means no directory is configured, same as a missing key.
    pub fn configured_log_directory(&self) -> Option<&str> {
        self.log_output_directory().filter(|dir| !dir.trim().is_empty())
    }

    /// Copy of this configuration with connection string secrets masked.
    pub fn redacted(&self) -> Self {
        Self {
            db_connection: ConnectionConfiguration {
                sql_type: self.db_connection.sql_type,
                connection_string: self.db_connection.redacted_connection_string(),
            },
            ..self.clone()
        }
    }
}

/// How to reach the target database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionConfiguration {
    #[serde(rename = "type")]
    sql_type: SqlType,
    connection_string: String,
}

impl ConnectionConfiguration {
    pub(crate) fn new(sql_type: SqlType, connection_string: impl Into<String>) -> Self {
        Self {
            sql_type,
            connection_string: connection_string.into(),
        }
    }

    /// Database type.
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    /// Raw connection string.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Connection string with password values replaced by [`REDACTED`].
    ///
    /// Works on `key=value;` style strings. Segments without `=` are kept as-is.
    pub fn redacted_connection_string(&self) -> String {
        self.connection_string
            .split(';')
            .map(|segment| match segment.split_once('=') {
                Some((key, _)) if is_secret_key(key) => format!("{}={}", key, REDACTED),
                _ => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn is_secret_key(key: &str) -> bool {
    let key = key.trim();
    SECRET_KEYS.iter().any(|secret| key.eq_ignore_ascii_case(secret))
}

/// Supported database types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SqlType {
    /// MySQL / MariaDB.
    MySql,
}

impl SqlType {
    /// Get the wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        SQL_TYPE_TAGS
            .iter()
            .find(|(_, ty)| ty == self)
            .map(|(tag, _)| *tag)
            .unwrap_or("unknown")
    }

    /// Look up a type by its wire tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        SQL_TYPE_TAGS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, ty)| *ty)
    }

    /// All accepted wire tags.
    pub fn supported_tags() -> Vec<&'static str> {
        SQL_TYPE_TAGS.iter().map(|(tag, _)| *tag).collect()
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
