//! Langsync - translation file manager for PHP array catalogs
//!
//! Langsync is a CLI tool and library for keeping `lang/<language>/<topic>.php`
//! translation files consistent: it shows and edits keys across every
//! language at once, finds keys used in source code that no translation file
//! defines yet, and reports keys missing from some languages.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation catalog, document codec and source key extraction
//! - `issues`: Issue type definitions for the `missing` check
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
