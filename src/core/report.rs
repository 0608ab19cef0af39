//! Run summaries printed after filtering

use crate::core::filter::FilterStats;
use crate::core::writer::WriteMode;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of one filtering run
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(serialize_with = "serialize_mode")]
    pub mode: WriteMode,
    /// Directives plus matched records
    pub kept: usize,
    pub stats: FilterStats,
    pub dry_run: bool,
    /// Lines that would be dropped, only populated for dry runs
    #[serde(skip)]
    pub diff: Option<String>,
}

fn serialize_mode<S: serde::Serializer>(mode: &WriteMode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&mode.to_string())
}

impl FilterReport {
    /// The single confirmation line printed on success.
    pub fn summary_line(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run: would keep {} lines in {}",
                self.kept,
                self.output.display()
            )
        } else {
            format!(
                "Filtered cookies written to {} (kept {} lines)",
                self.output.display(),
                self.kept
            )
        }
    }
}

/// Renders the lines removed between `before` and `after`, one per row,
/// prefixed with `- `.
pub fn render_drop_diff(before: &str, after: &str) -> String {
    let diff = similar::TextDiff::from_lines(before, after);
    let mut result = String::new();

    for change in diff.iter_all_changes() {
        if change.tag() == similar::ChangeTag::Delete {
            result.push_str("- ");
            result.push_str(change.value());
            if change.missing_newline() {
                result.push('\n');
            }
        }
    }
    result
}
