//! cookie-filter - trim Netscape `cookies.txt` files to an allow-list
//!
//! Reads a Netscape-format cookie file, keeps comments, blank lines and the
//! records whose domain contains one of the allow-listed strings, and writes
//! the result either to a new file or atomically back over the input.
//!
//! # Architecture
//!
//! - [`core`] - Line classification, filtering, atomic writes and reports
//! - [`config`] - Optional JSON configuration and allow-list resolution
//! - [`validators`] - Allow-list parsing and sanity checks
//! - [`utils`] - Utility functions (XDG directories)
//!
//! # Safety Features
//!
//! - In-place writes go through a temp file in the target's directory and an
//!   atomic rename; the original is never left truncated
//! - Lines are never rewritten, only kept or dropped, in their original order

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::classify::{DomainAllowList, LineClass, classify, keep};
pub use core::error::{Error, Result};
pub use core::job::FilterJob;
pub use core::report::FilterReport;
