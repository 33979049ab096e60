//! Template directory lookup under the template root.
use crate::error::{Error, Result};
use log::debug;
use std::path::{Component, Path, PathBuf};

/// Returns the directory of boilerplate `name` under `root`.
///
/// # Errors
/// * `Error::SourceNotFound` if `name` is not a single path segment or does not
///   name a directory
pub fn load_template<P: AsRef<Path>>(root: P, name: &str) -> Result<PathBuf> {
    let template_dir = root.as_ref().join(name);
    if !is_single_segment(name) || !template_dir.is_dir() {
        return Err(Error::SourceNotFound { template_dir });
    }

    debug!("Using boilerplate from '{}'.", template_dir.display());
    Ok(template_dir)
}

fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}
