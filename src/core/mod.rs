//! Core cookie filtering functionality
//!
//! - [`classify`]: Per-line keep/drop decision against a domain allow-list
//! - [`filter`]: Reading, decoding and filtering a whole cookie file
//! - [`writer`]: Atomic in-place replacement and new-file output
//! - [`job`]: A complete read → filter → write run
//! - [`report`]: Run summaries and dry-run diffs
//! - [`error`]: Error types and exit codes

pub mod classify;
pub mod error;
pub mod filter;
pub mod job;
pub mod report;
pub mod writer;

#[cfg(test)]
pub mod test_helpers;
