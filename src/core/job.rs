//! One end-to-end filtering run: read, classify, write, report

use crate::core::classify::DomainAllowList;
use crate::core::error::Result;
use crate::core::filter::{filter_lines, read_cookie_file};
use crate::core::report::{FilterReport, render_drop_diff};
use crate::core::writer::{WriteMode, write_lines};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct FilterJob {
    pub input: PathBuf,
    /// Destination; `None` overwrites `input` in place
    pub output: Option<PathBuf>,
    pub allow_list: DomainAllowList,
    /// Compute everything but leave the filesystem untouched
    pub dry_run: bool,
}

impl FilterJob {
    pub fn new(input: impl Into<PathBuf>, allow_list: DomainAllowList) -> Self {
        Self {
            input: input.into(),
            output: None,
            allow_list,
            dry_run: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }

    pub fn run(&self) -> Result<FilterReport> {
        let text = read_cookie_file(&self.input)?;
        let outcome = filter_lines(&text, &self.allow_list);

        let output = self.output_path();
        let mode = WriteMode::for_paths(&self.input, output);
        info!(
            "Keeping {} of {} lines from {} ({mode})",
            outcome.stats.kept(),
            outcome.stats.total(),
            self.input.display()
        );

        let diff = if self.dry_run {
            Some(render_drop_diff(&text, &outcome.to_text()))
        } else {
            write_lines(&outcome.kept, output, mode)?;
            None
        };

        Ok(FilterReport {
            input: self.input.clone(),
            output: output.to_path_buf(),
            mode,
            kept: outcome.stats.kept(),
            stats: outcome.stats,
            dry_run: self.dry_run,
            diff,
        })
    }
}
