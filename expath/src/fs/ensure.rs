//! Recursive directory creation.
//!
//! The parent of a directory is computed by joining `..` onto it and
//! resolving, the same collapse rule every other resolution uses. Each step
//! removes one segment, so the walk ends at the first existing ancestor or
//! fails once `..` would cancel the root.
//!
//! Creation is not transactional. If creating some level fails, ancestors
//! created earlier in the same call are left in place; calling again after
//! fixing the cause picks up where the last call stopped.

use std::io;

use log::debug;

use crate::error::{Error, Result};
use crate::fs::{FileSystem, OsFileSystem};
use crate::path::PathResolver;

/// Make sure `path` and all of its ancestors exist as directories.
///
/// `path` is resolved first, then missing directories are created from the
/// first missing ancestor down to `path`. A directory that appears between
/// the existence check and the creation call (another process racing to
/// create it) counts as success.
///
/// # Errors
///
/// Returns an error if:
/// - `path` or one of its parents cannot be resolved
/// - the walk reaches a root that does not exist as a directory
/// - creating any level fails ([`Error::Io`] names the failing path)
///
/// # Examples
///
/// ```
/// use expath::fs::{ensure_dir, FileSystem, OsFileSystem};
/// use expath::path::PathResolver;
///
/// let tmp = tempfile::tempdir().unwrap();
/// let target = format!("{}/a/b/c", tmp.path().display());
///
/// let fs = OsFileSystem::new();
/// ensure_dir(&fs, &PathResolver::new(), &target).unwrap();
/// assert!(fs.is_dir(&target));
/// ```
pub fn ensure_dir<F: FileSystem + ?Sized>(
    fs: &F,
    resolver: &PathResolver,
    path: &str,
) -> Result<()> {
    let target = resolver.resolve(path)?;
    ensure_resolved(fs, resolver, &target)
}

/// [`ensure_dir`] on the real filesystem with the native path style.
///
/// # Errors
///
/// See [`ensure_dir`].
pub fn mkdirs(path: &str) -> Result<()> {
    ensure_dir(&OsFileSystem::default(), &PathResolver::new(), path)
}

fn ensure_resolved<F: FileSystem + ?Sized>(
    fs: &F,
    resolver: &PathResolver,
    path: &str,
) -> Result<()> {
    if fs.is_dir(path) {
        return Ok(());
    }

    let parent = resolver.join(path, &[".."], true)?;
    ensure_resolved(fs, resolver, &parent)?;

    match fs.create_dir(path) {
        Ok(()) => {
            debug!("Created directory {path}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && fs.is_dir(path) => {
            debug!("Directory {path} was created concurrently");
            Ok(())
        }
        Err(source) => Err(Error::Io {
            path: path.to_string(),
            source,
        }),
    }
}
