//! Relative path resolution across every supported style.
//!
//! This module contains the resolution pipeline: detect the base path's
//! style, split it into a root and a body, apply the relative path's
//! segments, and rejoin with the style's separator.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! Each style has a root that resolution never rewrites and traversal never
//! escapes:
//!
//! - Drive-letter paths keep everything through `:\` (`c:\`).
//! - UNC paths keep `\\` plus the server name (`\\server`).
//! - URL paths keep the scheme, `//`, and the authority including any port
//!   (`http://host:8080`).
//! - POSIX paths keep the leading `/`.
//!
//! ## Relative paths
//!
//! A relative path may use `/` and `\` interchangeably, so a single relative
//! path resolves against a base of any style. `..` steps up one segment;
//! everything else, a lone `.` included, is appended verbatim.
//!
//! # Examples
//!
//! ```
//! use relto::resolve_path;
//!
//! assert_eq!(resolve_path("c:\\path1\\path2", "..\\..\\path3").unwrap(), "c:\\path3");
//! assert_eq!(resolve_path("http://path1:23512/path2", "../path3").unwrap(),
//!            "http://path1:23512/path3");
//! assert_eq!(resolve_path("/path1/path2", "../..").unwrap(), "/");
//! ```

pub mod directory;
pub mod linux;
pub mod unc;
pub mod url;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use directory::resolve_directory_path;
pub use linux::resolve_linux_path;
pub use unc::resolve_unc_path;
pub use url::resolve_url_path;

use crate::error::Result;
use crate::style::PathStyle;

/// Resolve a relative path against a base path of any supported style.
///
/// The base path's style is detected first; resolution then runs with that
/// style's root handling and separator. The call is pure string computation
/// with no filesystem or network access, so repeated and concurrent calls
/// are safe.
///
/// # Errors
///
/// Returns [`Error::UnsupportedStyle`](crate::Error::UnsupportedStyle) if
/// the base path matches no style, or
/// [`Error::RelativePathOutOfBounds`](crate::Error::RelativePathOutOfBounds)
/// if the relative path traverses above the style's root.
///
/// # Examples
///
/// ```
/// use relto::resolve_path;
///
/// let resolved = resolve_path("\\\\path1\\path2", "..").unwrap();
/// assert_eq!(resolved, "\\\\path1");
///
/// assert!(resolve_path("relative/base", "x").is_err());
/// ```
pub fn resolve_path(base_path: &str, relative_path: &str) -> Result<String> {
    let style = PathStyle::detect(base_path)?;
    log::debug!("Resolving {relative_path:?} against {base_path:?} ({style} style)");

    match style {
        PathStyle::Directory => resolve_directory_path(base_path, relative_path),
        PathStyle::Unc => resolve_unc_path(base_path, relative_path),
        PathStyle::Url => resolve_url_path(base_path, relative_path),
        PathStyle::Linux => resolve_linux_path(base_path, relative_path),
    }
}
