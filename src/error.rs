//! Error types for the relto library.
//!
//! This module provides the error taxonomy for path resolution, using
//! `thiserror` for ergonomic error handling. Every error is terminal: a
//! failed resolution produces no partial result and the library performs no
//! retries or fallbacks of its own.

use thiserror::Error;

/// Result type alias for operations that may fail with a relto error.
///
/// # Examples
///
/// ```
/// use relto::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/resolved"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the relto library.
///
/// This enum encompasses all failure conditions that can occur while
/// classifying a base path or resolving a relative path against it.
#[derive(Debug, Error)]
pub enum Error {
    /// No supported path style matched the base path.
    #[error("path style not supported: {path}")]
    UnsupportedStyle {
        /// The base path that matched no style predicate.
        path: String,
    },

    /// A base path did not satisfy the structural requirements of the style
    /// it was resolved under.
    #[error("invalid path format {path}: {reason}")]
    InvalidFormat {
        /// The offending base path.
        path: String,
        /// The requirement the path failed to meet.
        reason: String,
    },

    /// A `..` segment attempted to traverse above the base path's root.
    #[error("relative path out of bounds")]
    RelativePathOutOfBounds,
}

impl Error {
    /// Check if the error indicates traversal above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use relto::Error;
    ///
    /// let err = Error::RelativePathOutOfBounds;
    /// assert!(err.is_out_of_bounds());
    /// ```
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::RelativePathOutOfBounds)
    }

    /// Check if the error is format-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use relto::Error;
    ///
    /// let err = Error::InvalidFormat {
    ///     path: String::from("path1"),
    ///     reason: String::from("path must start with a single /"),
    /// };
    /// assert!(err.is_invalid_format());
    /// ```
    #[must_use]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
