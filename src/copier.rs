//! Recursive copy of a boilerplate directory into a new project directory.

use crate::error::{Error, Result};
use log::debug;
use std::fs::{self, File, Permissions};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copies the tree under `source` into `destination`.
///
/// `destination` is created first; an already existing directory is tolerated.
/// Files are copied byte for byte and keep their permission bits. Directory
/// permission bits are applied once the walk is complete, so read-only source
/// directories can still be populated.
///
/// The walk stops at the first failure and nothing is rolled back.
///
/// # Errors
/// * `Error::DestinationCreateFailed` if `destination` cannot be created
/// * `Error::DirectoryCreateFailed` if a nested directory cannot be created
/// * `Error::FileOpenFailed` if a source entry cannot be read
/// * `Error::FileCreateFailed` if a destination file cannot be created
/// * `Error::FileCopyFailed` if the bytes cannot be copied
pub fn copy_tree<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    create_destination(destination)?;

    let mut dir_permissions: Vec<(PathBuf, Permissions)> = Vec::new();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::FileOpenFailed {
            path: e.path().unwrap_or(source).to_path_buf(),
            source: e.into(),
        })?;
        let relative = match entry.path().strip_prefix(source) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative,
            // The root itself is `destination`.
            _ => continue,
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", target.display());
            fs::create_dir(&target).map_err(|source| Error::DirectoryCreateFailed {
                path: target.clone(),
                source,
            })?;
            let metadata = entry.metadata().map_err(|e| Error::DirectoryCreateFailed {
                path: target.clone(),
                source: e.into(),
            })?;
            dir_permissions.push((target, metadata.permissions()));
        } else {
            debug!("Copying file: {}", target.display());
            copy_file(entry.path(), &target)?;
        }
    }

    // Deepest first, so a read-only parent never blocks its children.
    for (dir, permissions) in dir_permissions.into_iter().rev() {
        fs::set_permissions(&dir, permissions).map_err(|source| Error::DirectoryCreateFailed {
            path: dir,
            source,
        })?;
    }

    Ok(())
}

fn create_destination(destination: &Path) -> Result<()> {
    match fs::create_dir(destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && destination.is_dir() => {
            debug!("Destination '{}' already exists.", destination.display());
            Ok(())
        }
        Err(source) => Err(Error::DestinationCreateFailed {
            path: destination.to_path_buf(),
            source,
        }),
    }
}

/// Both handles are dropped when this returns, whatever the outcome.
fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let mut reader = File::open(source).map_err(|e| Error::FileOpenFailed {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut writer = File::create(target).map_err(|e| Error::FileCreateFailed {
        path: target.to_path_buf(),
        source: e,
    })?;

    let copy_failed = |e| Error::FileCopyFailed {
        path: target.to_path_buf(),
        source: e,
    };
    io::copy(&mut reader, &mut writer).map_err(copy_failed)?;

    let permissions = reader.metadata().map_err(copy_failed)?.permissions();
    writer.set_permissions(permissions).map_err(copy_failed)?;

    Ok(())
}
