//! Listing of the boilerplates available under a template root.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Returns the names of every entry directly under `root`, sorted by name.
///
/// # Errors
/// * `Error::RootUnreadable` if `root` cannot be listed
/// * `Error::EmptyCatalog` if `root` has no entries
pub fn list_templates<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = root.as_ref();
    let unreadable = |source| Error::RootUnreadable {
        root: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    if names.is_empty() {
        return Err(Error::EmptyCatalog {
            root: root.to_path_buf(),
        });
    }

    names.sort();
    debug!("Found {} boilerplates in '{}'.", names.len(), root.display());
    Ok(names)
}
