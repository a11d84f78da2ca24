//! repodoc generates repository boilerplate from templates: licences, README,
//! community health files, Sphinx documentation, packaging manifests and dotfiles.
//! It discovers which variables every template needs, builds a context for them
//! and renders each template to its output path.

/// Built-in template sources
pub mod assets;

/// Template catalog and group classification
pub mod catalog;

/// Command-line interface module for the repodoc application
pub mod cli;

/// Subcommand implementations
pub mod commands;

/// Persisted configuration file (repodoc_config.yml)
pub mod config;

pub mod constants;

/// Typed template variables and context construction
pub mod context;

/// Error types and handling for the repodoc application
pub mod error;

/// Static extraction of template variables
pub mod extractor;

pub mod logger;

/// MiniJinja rendering of catalogued templates
pub mod renderer;

/// Writing rendered templates to disk
pub mod writer;
