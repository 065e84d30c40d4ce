//! Resolution against UNC base paths such as `\\server\share`.

use crate::error::{Error, Result};
use crate::segment;

/// Split a UNC base into its root and body.
///
/// The root is the leading `\\` plus the first following component (the
/// server name); the body is everything from the next backslash on. A base
/// with no third backslash is all root.
fn split_root(base_path: &str) -> Result<(&str, &str)> {
    if !base_path.starts_with("\\\\") {
        return Err(Error::InvalidFormat {
            path: base_path.to_string(),
            reason: String::from("path must start with \\\\"),
        });
    }

    match base_path[2..].find('\\') {
        Some(index) => Ok(base_path.split_at(index + 2)),
        None => Ok((base_path, "")),
    }
}

/// Resolve a relative path against a UNC base path.
///
/// The UNC root (`\\` plus the server name) is preserved untouched. The rest
/// of the base and the relative path are resolved segment-wise and rejoined
/// with backslashes.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the base does not start with `\\`, or
/// [`Error::RelativePathOutOfBounds`] if the relative path traverses above
/// the UNC root.
///
/// # Examples
///
/// ```
/// use relto::resolve_unc_path;
///
/// let resolved = resolve_unc_path("\\\\path1\\path2", "..\\path3").unwrap();
/// assert_eq!(resolved, "\\\\path1\\path3");
/// ```
pub fn resolve_unc_path(base_path: &str, relative_path: &str) -> Result<String> {
    let (root, body) = split_root(base_path)?;

    let segments = segment::apply_relative(segment::split(body), &segment::split(relative_path))?;

    if segments.is_empty() {
        Ok(root.to_string())
    } else {
        Ok(format!("{root}\\{}", segments.join("\\")))
    }
}
