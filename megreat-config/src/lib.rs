//! # megreat-config
//!
//! Configuration loader for the megreat migration tool.
//!
//! This crate provides:
//! - Parsing of the JSON migration configuration document
//! - Validation of required fields in a fixed order, with fixed error messages
//! - Typed configuration values for the components that run migrations
//!
//! ## Example
//!
//! ```rust
//! use megreat_config::{parse_configuration, SqlType};
//!
//! let config = parse_configuration(r#"
//!     {
//!         "sql_files_directories": ["./sql/schema", "./sql/data"],
//!         "db_connection": {
//!             "type": "mysql",
//!             "connection_string": "Server=localhost;Database=app;Uid=app;Pwd=secret"
//!         },
//!         "log_output_directory": "./logs"
//!     }
//! "#)?;
//!
//! assert_eq!(config.sql_files_directories().len(), 2);
//! assert_eq!(config.db_connection().sql_type(), SqlType::MySql);
//! assert_eq!(config.log_output_directory(), Some("./logs"));
//! # Ok::<(), megreat_config::ConfigError>(())
//! ```
//!
//! Invalid documents are rejected with the first rule they break:
//!
//! ```rust
//! use megreat_config::parse_configuration;
//!
//! let err = parse_configuration(r#"{"sql_files_directories": []}"#).unwrap_err();
//! assert_eq!(err.to_string(), "sql_files_directories configuration was empty.");
//! ```

pub mod config;
pub mod error;
pub mod parser;

pub use config::{ConnectionConfiguration, MigrationConfiguration, SqlType};
pub use error::{ConfigError, ConfigResult};
pub use parser::{parse_configuration, parse_configuration_file};
