//! Location of the running executable.

use std::env;

use log::debug;

use crate::error::{Error, Result};
use crate::path::PathResolver;

/// The resolved path of the running executable.
///
/// The operating system is asked for the executable's location and the
/// answer is passed through `resolver`, so it comes back in canonical form.
/// Symlinks are not followed beyond what the operating system itself reports.
///
/// # Errors
///
/// Returns an error if:
/// - the operating system cannot report the path ([`Error::ExecutablePath`])
/// - the path is not valid UTF-8 ([`Error::InvalidArgument`])
/// - the path cannot be resolved under `resolver`'s style
///
/// # Examples
///
/// ```
/// use expath::fs::current_executable_path;
/// use expath::path::PathResolver;
///
/// let resolver = PathResolver::new();
/// let exe = current_executable_path(&resolver).unwrap();
/// assert!(resolver.is_absolute(&exe));
/// ```
pub fn current_executable_path(resolver: &PathResolver) -> Result<String> {
    let exe = env::current_exe().map_err(|source| Error::ExecutablePath { source })?;
    let exe = exe
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidArgument {
            reason: format!(
                "executable path is not valid UTF-8: {}",
                raw.to_string_lossy()
            ),
        })?;

    debug!("Operating system reports executable at {exe}");
    resolver.resolve(&exe)
}

/// The directory containing the running executable.
///
/// # Errors
///
/// See [`current_executable_path`].
pub fn executable_dir(resolver: &PathResolver) -> Result<String> {
    let exe = current_executable_path(resolver)?;
    Ok(resolver.dirname(&exe))
}
