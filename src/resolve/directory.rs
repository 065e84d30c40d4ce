//! Resolution against drive-letter base paths such as `c:\users`.

use crate::error::{Error, Result};
use crate::segment;

/// Split a drive-letter base into its root and body.
///
/// The root runs through the first `:\` anchor inclusive, so it always
/// carries its own trailing separator.
fn split_root(base_path: &str) -> Result<(&str, &str)> {
    match base_path.find(":\\") {
        Some(anchor) => Ok(base_path.split_at(anchor + 2)),
        None => Err(Error::InvalidFormat {
            path: base_path.to_string(),
            reason: String::from("path must contain :\\"),
        }),
    }
}

/// Resolve a relative path against a drive-letter base path.
///
/// The drive root (everything through `:\`) is preserved untouched. The rest
/// of the base and the relative path are resolved segment-wise and rejoined
/// with backslashes.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the base contains no `:\` anchor, or
/// [`Error::RelativePathOutOfBounds`] if the relative path traverses above
/// the drive root.
///
/// # Examples
///
/// ```
/// use relto::resolve_directory_path;
///
/// let resolved = resolve_directory_path("c:\\path1\\path2", "..\\path3").unwrap();
/// assert_eq!(resolved, "c:\\path1\\path3");
/// ```
pub fn resolve_directory_path(base_path: &str, relative_path: &str) -> Result<String> {
    let (root, body) = split_root(base_path)?;

    let segments = segment::apply_relative(segment::split(body), &segment::split(relative_path))?;

    // The root already ends with a backslash, so the joined body follows it
    // directly.
    Ok(format!("{root}{}", segments.join("\\")))
}
