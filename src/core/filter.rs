//! Read → classify → collect pipeline
//!
//! The whole input is loaded into memory once. Lines keep their original
//! terminators so kept lines are written back byte-for-byte.

use crate::core::classify::{DomainAllowList, LineClass, classify};
use crate::core::error::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Per-class line counts for one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub directive: usize,
    pub matched: usize,
    pub malformed: usize,
    pub unmatched: usize,
}

impl FilterStats {
    fn record(&mut self, class: LineClass) {
        match class {
            LineClass::Directive => self.directive += 1,
            LineClass::Matched => self.matched += 1,
            LineClass::Malformed => self.malformed += 1,
            LineClass::Unmatched => self.unmatched += 1,
        }
    }

    pub fn count(&self, class: LineClass) -> usize {
        match class {
            LineClass::Directive => self.directive,
            LineClass::Matched => self.matched,
            LineClass::Malformed => self.malformed,
            LineClass::Unmatched => self.unmatched,
        }
    }

    /// Directives plus matched records
    pub fn kept(&self) -> usize {
        self.directive + self.matched
    }

    pub fn dropped(&self) -> usize {
        self.malformed + self.unmatched
    }

    pub fn total(&self) -> usize {
        self.kept() + self.dropped()
    }
}

/// Lines retained by a filtering pass, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub kept: Vec<&'a str>,
    pub stats: FilterStats,
}

impl FilterOutcome<'_> {
    /// Concatenates the kept lines back into file contents.
    pub fn to_text(&self) -> String {
        self.kept.concat()
    }
}

/// Decodes UTF-8, dropping invalid byte sequences instead of failing.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Splits text into lines, each keeping its terminator verbatim.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing line without a
/// terminator is returned as is. Empty input yields no lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\n', '\r']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Classifies every line of `text` and keeps the directives and matches.
pub fn filter_lines<'a>(text: &'a str, allow_list: &DomainAllowList) -> FilterOutcome<'a> {
    let mut outcome = FilterOutcome::default();
    for line in split_lines(text) {
        let class = classify(line, allow_list);
        outcome.stats.record(class);
        if class.is_kept() {
            outcome.kept.push(line);
        }
    }

    debug!(
        directive = outcome.stats.directive,
        matched = outcome.stats.matched,
        malformed = outcome.stats.malformed,
        unmatched = outcome.stats.unmatched,
        "Classified cookie lines"
    );
    outcome
}

/// Fails with [`Error::InputNotFound`] when `path` does not exist.
pub fn ensure_input_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::InputNotFound(path.to_path_buf()))
    }
}

/// Reads a cookie file fully into memory.
///
/// Fails with [`Error::InputNotFound`] before attempting the read when the
/// path does not exist.
pub fn read_cookie_file(path: &Path) -> Result<String> {
    ensure_input_exists(path)?;

    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = decode_lossy(&bytes);
    if text.len() != bytes.len() {
        debug!(
            "Dropped {} undecodable bytes from {}",
            bytes.len() - text.len(),
            path.display()
        );
    }
    Ok(text)
}
