//! Resolution of the template root, selector command and project path.
//! Values come from command line flags, then environment variables, then defaults.

use crate::error::{Error, Result};
use log::debug;
use std::path::PathBuf;

/// Environment variable holding the template root.
pub const ROOT_ENV: &str = "RAT_ROOT";

/// Environment variable holding the selector command line.
pub const SELECT_CMD_ENV: &str = "RAT_SELECT_CMD";

/// Template root used when neither flag nor environment sets one, relative to home.
pub const DEFAULT_ROOT_DIR: &str = ".rat";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose children are the boilerplates.
    pub root: PathBuf,
    /// Shell command line of the interactive picker.
    pub select_cmd: Option<String>,
}

impl Config {
    /// Builds the configuration, expanding `~` and environment variables in `root`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if expansion fails or no home directory is known
    pub fn new(root: Option<&str>, select_cmd: Option<&str>) -> Result<Self> {
        let root = match root.filter(|root| !root.is_empty()) {
            Some(root) => expand_path(root)?,
            None => default_root()?,
        };
        let select_cmd =
            select_cmd.filter(|cmd| !cmd.trim().is_empty()).map(str::to_string);

        debug!("Template root: '{}'", root.display());
        Ok(Self { root, select_cmd })
    }
}

/// Returns `~/.rat`.
pub fn default_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_ROOT_DIR))
        .ok_or_else(|| Error::ConfigError("failed to get a home directory path".to_string()))
}

/// Expands a leading `~` and `$VAR`/`${VAR}` references.
///
/// # Errors
/// * `Error::ConfigError` if a referenced variable is not set
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path).map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_select_cmd_is_unset() {
        let config = Config::new(Some("/tmp/templates"), Some("  ")).unwrap();
        assert_eq!(config.root, PathBuf::from("/tmp/templates"));
        assert_eq!(config.select_cmd, None);
    }

    #[test]
    fn test_missing_variable_is_config_error() {
        let result = expand_path("$RAT_TEST_SURELY_UNDEFINED_VARIABLE/templates");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
