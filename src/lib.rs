#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # relto
//!
//! A library for resolving relative paths against base paths written in
//! different notations.
//!
//! Four base path styles are supported: drive-letter (`c:\users`), UNC
//! (`\\server\share`), URL (`http://host:8080/api`), and POSIX (`/usr/local`).
//! Resolution is pure string manipulation with no filesystem or network
//! access. Segment text and casing pass through untouched, and `..`
//! traversal is bounds-checked against the style's root.
//!
//! ## Core Types
//!
//! - [`resolve_path`]: Resolve against a base of any style, detected
//!   automatically
//! - [`PathStyle`]: The supported styles and their detection rules
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use relto::{resolve_path, PathStyle};
//!
//! // The base path's notation picks the resolution rules
//! assert_eq!(PathStyle::detect("c:\\users").unwrap(), PathStyle::Directory);
//! assert_eq!(resolve_path("c:\\users\\build", "..\\src").unwrap(), "c:\\users\\src");
//!
//! // Relative paths may mix separators freely
//! assert_eq!(resolve_path("http://host:8080/api", "../docs").unwrap(),
//!            "http://host:8080/docs");
//! assert_eq!(resolve_path("/usr/local", "..\\share/man").unwrap(), "/usr/share/man");
//!
//! // Traversal above the root is an error
//! assert!(resolve_path("/", "..").is_err());
//! ```

pub mod error;
pub mod resolve;
pub mod segment;
pub mod style;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use resolve::{
    resolve_directory_path, resolve_linux_path, resolve_path, resolve_unc_path, resolve_url_path,
};
pub use style::PathStyle;
