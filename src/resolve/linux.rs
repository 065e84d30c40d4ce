//! Resolution against POSIX base paths such as `/usr/local`.

use crate::error::{Error, Result};
use crate::segment;

/// Resolve a relative path against a POSIX base path.
///
/// The root is the single leading `/`. The rest of the base and the relative
/// path are resolved segment-wise and rejoined with forward slashes; the
/// filesystem root itself renders as `/`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the base does not start with `/`, or
/// [`Error::RelativePathOutOfBounds`] if the relative path traverses above
/// the filesystem root.
///
/// # Examples
///
/// ```
/// use relto::resolve_linux_path;
///
/// let resolved = resolve_linux_path("/path1/path2", "../path3").unwrap();
/// assert_eq!(resolved, "/path1/path3");
/// ```
pub fn resolve_linux_path(base_path: &str, relative_path: &str) -> Result<String> {
    if !base_path.starts_with('/') {
        return Err(Error::InvalidFormat {
            path: base_path.to_string(),
            reason: String::from("path must start with a single /"),
        });
    }

    let segments = segment::apply_relative(
        segment::split(&base_path[1..]),
        &segment::split(relative_path),
    )?;

    Ok(format!("/{}", segments.join("/")))
}
