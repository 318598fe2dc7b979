//! # megreat
//!
//! Configuration layer of the megreat SQL migration tool.
//!
//! megreat applies SQL migration files from one or more directories to a
//! target database. Before anything runs, the JSON configuration file is
//! parsed and validated into a [`MigrationConfiguration`] that the file
//! discovery, database and logging components consume.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use megreat::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = parse_configuration_file("megreat.json")?;
//!
//!     for directory in config.sql_files_directories() {
//!         println!("migrations from {directory}");
//!     }
//!
//!     match config.db_connection().sql_type() {
//!         SqlType::MySql => println!("target: MySQL"),
//!         _ => println!("target: other"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Configuration parsing and validation.
pub mod config {
    pub use megreat_config::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{
        ConfigError, ConfigResult, ConnectionConfiguration, MigrationConfiguration, SqlType,
        parse_configuration, parse_configuration_file,
    };
}

// Re-export key types at the crate root
pub use config::{ConfigError, MigrationConfiguration, parse_configuration};
