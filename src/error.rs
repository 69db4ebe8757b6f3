//! Error handling for the wpmake application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for wpmake operations.
///
/// Generation errors (input, manifest, materialization) abort the run.
/// Installer errors are reported per installer and never abort it.
#[derive(Error, Debug)]
pub enum Error {
    /// Prompting cannot proceed and no usable default exists
    #[error("Input unavailable: {0}.")]
    InputUnavailable(String),

    /// A manifest destination references a field the options do not provide
    #[error("Missing field '{field}' referenced by manifest entry '{entry}'.")]
    MissingField { field: String, entry: String },

    /// Read or write failure on a specific path during materialization
    #[error("IO failure on '{path}': {source}.")]
    IoFailure { path: String, source: io::Error },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors in the manifest or the preloaded answers document
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The installer process could not be spawned at all
    #[error("Failed to launch '{installer} install': {source}.")]
    InstallerLaunchFailure { installer: String, source: io::Error },

    /// The installer exited with 127 (command not found)
    #[error("Could not find {installer}. Install it and run '{installer} install' yourself.")]
    InstallerExit127 { installer: String },

    #[error("'{installer} install' failed with {status}.")]
    InstallerFailed { installer: String, status: String },

    #[error("Failed to start installers: {0}.")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// Wraps an IO error with the path it happened on.
    pub fn io_failure<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::IoFailure { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with wpmake's Error as the error type.
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
