//! Error handling for rat.
//! Every core operation returns [`Result`]; formatting the message and
//! choosing the exit status is left to the binary's entry point.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds of a single rat invocation.
///
/// None of them are recovered internally. A copy that fails partway
/// leaves whatever already landed under the destination on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// The template root could not be listed.
    #[error("Cannot read template root '{root}': {source}")]
    RootUnreadable {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template root exists but holds no entries.
    #[error("Not exists boilerplate directories in '{root}'")]
    EmptyCatalog { root: PathBuf },

    /// Selection was needed but no selector command is configured.
    #[error("Please set 'RAT_SELECT_CMD' environment value or pass --select-cmd")]
    SelectorNotConfigured,

    /// The selector command is missing, could not be run, or exited non-zero.
    #[error("Selector command '{command}' failed: {reason}")]
    SelectorCommandFailed { command: String, reason: String },

    /// The selector ran successfully but printed nothing.
    #[error("No boilerplate selected")]
    NoSelectionMade,

    /// The resolved template directory does not exist.
    #[error("Not exists directory '{template_dir}'")]
    SourceNotFound { template_dir: PathBuf },

    #[error("Cannot create destination '{path}': {source}")]
    DestinationCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create directory '{path}': {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot open '{path}': {source}")]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create file '{path}': {source}")]
    FileCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot copy into '{path}': {source}")]
    FileCopyFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors while resolving configuration values
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents invalid command line usage
    #[error("{0}")]
    UsageError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prefix identifying a message as fatal.
pub const FATAL_PREFIX: &str = "fatal: ";

/// Prints the error with the fatal prefix and exits with status 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{FATAL_PREFIX}{err}");
    std::process::exit(1);
}
