//! megreat CLI - Command-line interface for the megreat migration tool.
//!
//! This crate provides the CLI tool for checking and inspecting migration
//! configuration files, and the logging setup driven by them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
