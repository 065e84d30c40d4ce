//! Path segment splitting and traversal.
//!
//! This module provides the segment-level building blocks shared by every
//! path style: splitting a path body into components and applying a relative
//! path's traversal (`..`) semantics to a base segment list.
//!
//! Splitting treats both `/` and `\` as separators regardless of the style in
//! play, so mixed-separator relative paths resolve against any base notation.
//! Segments are borrowed slices of the input and are preserved verbatim: no
//! trimming of interior characters and no case changes.

use crate::error::{Error, Result};

/// Split a path body into an ordered list of segments.
///
/// Every occurrence of `/` or `\` acts as a separator. Pieces that are empty
/// or consist only of whitespace are discarded; all surviving pieces are kept
/// verbatim, in left-to-right order.
///
/// # Examples
///
/// ```
/// use relto::segment;
///
/// assert_eq!(segment::split("path1/path2"), vec!["path1", "path2"]);
/// assert_eq!(segment::split("a\\b/c"), vec!["a", "b", "c"]);
/// assert_eq!(segment::split("//a//"), vec!["a"]);
/// assert!(segment::split("").is_empty());
/// ```
#[must_use]
pub fn split(text: &str) -> Vec<&str> {
    text.split(['/', '\\'])
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

/// Apply a relative path's segments to a base segment list.
///
/// Relative segments are processed in order. A segment equal to exactly `..`
/// removes the last element of the working list; every other segment,
/// `.` included, is appended verbatim with no special handling.
///
/// # Errors
///
/// Returns [`Error::RelativePathOutOfBounds`] if a `..` segment is
/// encountered while the working list is empty: traversal never escapes
/// above the style's root.
///
/// # Examples
///
/// ```
/// use relto::segment;
///
/// let resolved = segment::apply_relative(vec!["path1", "path2"], &["..", "path3"]).unwrap();
/// assert_eq!(resolved, vec!["path1", "path3"]);
///
/// let out_of_bounds = segment::apply_relative(Vec::new(), &[".."]);
/// assert!(out_of_bounds.is_err());
/// ```
pub fn apply_relative<'a>(base: Vec<&'a str>, relative: &[&'a str]) -> Result<Vec<&'a str>> {
    let mut resolved = base;

    for &segment in relative {
        if segment == ".." {
            if resolved.pop().is_none() {
                return Err(Error::RelativePathOutOfBounds);
            }
        } else {
            resolved.push(segment);
        }
    }

    Ok(resolved)
}
