//! Path style classification.
//!
//! This module provides the [`PathStyle`] enum describing the four supported
//! base path notations, along with detection from a base path string.
//!
//! Detection rules are evaluated in a fixed priority order and the first
//! match wins. The ordering is load-bearing: predicates can overlap on
//! adversarial inputs (a path containing `:\` classifies as `Directory` even
//! when it also starts with `\\`), and the chain below resolves every such
//! overlap deterministically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The notation a base path follows.
///
/// A style is determined once per resolution call from the base path and is
/// immutable for the duration of that call.
///
/// # Examples
///
/// ```
/// use relto::PathStyle;
///
/// let style = PathStyle::detect("http://host:8080/docs").unwrap();
/// assert_eq!(style, PathStyle::Url);
/// assert_eq!(style.separator(), '/');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Windows drive-letter path, e.g. `C:\projects`.
    Directory,
    /// Windows UNC share path, e.g. `\\server\share`.
    Unc,
    /// URL-style path, e.g. `http://host:8080/docs`.
    Url,
    /// POSIX absolute path, e.g. `/usr/local`.
    Linux,
}

impl PathStyle {
    /// Detect the style of a base path.
    ///
    /// Rules, in priority order (first match wins):
    /// 1. contains `:\`: [`PathStyle::Directory`]
    /// 2. starts with `\\`: [`PathStyle::Unc`]
    /// 3. contains `//`: [`PathStyle::Url`]
    /// 4. starts with `/`: [`PathStyle::Linux`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedStyle`] if no rule matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use relto::PathStyle;
    ///
    /// assert_eq!(PathStyle::detect("c:\\projects").unwrap(), PathStyle::Directory);
    /// assert_eq!(PathStyle::detect("\\\\server\\share").unwrap(), PathStyle::Unc);
    /// assert_eq!(PathStyle::detect("http://host/docs").unwrap(), PathStyle::Url);
    /// assert_eq!(PathStyle::detect("/usr/local").unwrap(), PathStyle::Linux);
    /// assert!(PathStyle::detect("relative/path").is_err());
    /// ```
    pub fn detect(base_path: &str) -> Result<Self> {
        if base_path.contains(":\\") {
            Ok(Self::Directory)
        } else if base_path.starts_with("\\\\") {
            Ok(Self::Unc)
        } else if base_path.contains("//") {
            Ok(Self::Url)
        } else if base_path.starts_with('/') {
            Ok(Self::Linux)
        } else {
            Err(Error::UnsupportedStyle {
                path: base_path.to_string(),
            })
        }
    }

    /// Returns the separator used to rejoin segments in this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use relto::PathStyle;
    ///
    /// assert_eq!(PathStyle::Directory.separator(), '\\');
    /// assert_eq!(PathStyle::Linux.separator(), '/');
    /// ```
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Directory | Self::Unc => '\\',
            Self::Url | Self::Linux => '/',
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::Unc => write!(f, "unc"),
            Self::Url => write!(f, "url"),
            Self::Linux => write!(f, "linux"),
        }
    }
}
