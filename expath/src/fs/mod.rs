//! Filesystem collaborators.
//!
//! The path algorithms never touch the disk. The few operations that do
//! (existence checks, single-level directory creation, the executable path
//! query) live here, behind the [`FileSystem`] trait so that the recursive
//! directory creation in [`ensure`] can be exercised without a real disk.

pub mod ensure;
pub mod exec;

use std::fs;
use std::io;

use crate::config::Config;

pub use ensure::{ensure_dir, mkdirs};
pub use exec::{current_executable_path, executable_dir};

/// Permissions given to directories created by [`OsFileSystem`] by default.
///
/// Owner and group get full access, others may read and traverse. The
/// process umask still applies.
pub const DEFAULT_DIR_MODE: u32 = 0o775;

/// The filesystem queries and mutations the path utilities depend on.
pub trait FileSystem {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &str) -> bool;

    /// Create the single directory `path`. Its parent must already exist.
    ///
    /// # Errors
    ///
    /// Returns the operating system's error if the directory could not be
    /// created, including when something already exists at `path`.
    fn create_dir(&self, path: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by the real operating system.
///
/// # Examples
///
/// ```
/// use expath::fs::{FileSystem, OsFileSystem};
///
/// let fs = OsFileSystem::new().with_dir_mode(0o700);
/// let tmp = std::env::temp_dir();
/// assert!(fs.is_dir(tmp.to_str().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsFileSystem {
    dir_mode: u32,
}

impl Default for OsFileSystem {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl OsFileSystem {
    /// Create a filesystem handle using [`DEFAULT_DIR_MODE`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the permission bits for newly created directories.
    ///
    /// Only meaningful on Unix; ignored elsewhere.
    #[must_use]
    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Create a filesystem handle using the directory mode from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_dir_mode(config.dir_mode.unwrap_or(DEFAULT_DIR_MODE))
    }

    /// The permission bits used for newly created directories.
    #[must_use]
    pub fn dir_mode(&self) -> u32 {
        self.dir_mode
    }
}

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &str) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.is_dir())
    }

    fn is_file(&self, path: &str) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.is_file())
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }
        builder.create(path)
    }
}

#[cfg(test)]
#[allow(missing_docs)]
mod mock {
    use std::io;

    mockall::mock! {
        pub FileSystem {}

        impl super::FileSystem for FileSystem {
            fn is_dir(&self, path: &str) -> bool;
            fn is_file(&self, path: &str) -> bool;
            fn create_dir(&self, path: &str) -> io::Result<()>;
        }
    }
}

#[cfg(test)]
pub(crate) use mock::MockFileSystem;
