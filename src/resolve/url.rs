//! Resolution against URL base paths such as `http://host:8080/api`.

use crate::error::{Error, Result};
use crate::segment;

/// Split a URL base into its root and body.
///
/// The root runs from the start of the string through the authority: the
/// scheme (if any), the `//` anchor, and everything up to the next `/`. Any
/// port stays inside the root. A base with no `/` after the authority is all
/// root.
fn split_root(base_path: &str) -> Result<(&str, &str)> {
    let authority_start = match base_path.find("//") {
        Some(anchor) => anchor + 2,
        None => {
            return Err(Error::InvalidFormat {
                path: base_path.to_string(),
                reason: String::from("path must contain //"),
            });
        }
    };

    match base_path[authority_start..].find('/') {
        Some(index) => Ok(base_path.split_at(authority_start + index)),
        None => Ok((base_path, "")),
    }
}

/// Resolve a relative path against a URL base path.
///
/// The root (scheme, `//`, and authority including any port) is preserved
/// untouched. The rest of the base and the relative path are resolved
/// segment-wise and rejoined with forward slashes.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the base contains no `//` anchor, or
/// [`Error::RelativePathOutOfBounds`] if the relative path traverses above
/// the authority.
///
/// # Examples
///
/// ```
/// use relto::resolve_url_path;
///
/// let resolved = resolve_url_path("http://path1:23512/path2", "../path3").unwrap();
/// assert_eq!(resolved, "http://path1:23512/path3");
/// ```
pub fn resolve_url_path(base_path: &str, relative_path: &str) -> Result<String> {
    let (root, body) = split_root(base_path)?;

    let segments = segment::apply_relative(segment::split(body), &segment::split(relative_path))?;

    if segments.is_empty() {
        Ok(root.to_string())
    } else {
        Ok(format!("{root}/{}", segments.join("/")))
    }
}
