//! Error handling for the repodoc application.
//! Defines the error type and result alias used throughout the crate.

use thiserror::Error;

/// Custom error types for repodoc operations.
///
/// Missing template variables are deliberately absent from this list: a template that
/// references a variable the context does not define renders it as an empty value.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A template source could not be parsed.
    #[error("Template '{identifier}' is invalid: {source}.")]
    AssetError {
        identifier: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Template '{identifier}' does not exist in the catalog.")]
    TemplateNotFoundError { identifier: String },

    #[error("Unknown licence '{licence}' (available: {available}).")]
    UnknownLicenceError { licence: String, available: String },

    /// The template set violates a catalog invariant.
    #[error("Catalog error: {0}.")]
    CatalogError(String),

    /// The persisted configuration file could not be read back into a context.
    #[error("Configuration file '{path}' is invalid: {reason}.")]
    ConfigFormatError { path: String, reason: String },

    /// Represents errors that occur during template rendering
    #[error("Render error: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// Writing one rendered output failed. Outputs written before it are kept.
    #[error("Failed to write '{path}': {source}.")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with repodoc's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
